//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the chrome view and the tab controller,
//! and shuttles requests, responses and events between them.

mod core;
mod event_handler;
mod host;
mod init;
mod ipc_dispatch;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::TabhostApp;
