//! Content surfaces for Tabhost tabs.
//!
//! Provides:
//! - The `ContentSurface` / `SurfaceFactory` seam the tab core drives
//! - Engine event queue with per-surface disposable subscriptions
//! - Navigation history tracking (back/forward availability)
//! - The `wry` implementation of content surfaces and the chrome view
//! - Custom protocol for serving bundled chrome assets
//! - IPC bridge between the chrome's JavaScript and Rust

pub mod bounds;
pub mod chrome;
pub mod content;
pub mod events;
pub mod factory;
pub mod history;
pub mod ipc;
pub mod surface;
pub mod wry_surface;

pub use chrome::ChromeView;
pub use content::ContentProvider;
pub use events::{Subscription, SurfaceEmitter, SurfaceEvent, SurfaceEventQueue, TaggedEvent};
pub use factory::SurfaceFactory;
pub use history::NavHistory;
pub use ipc::{js_dispatch_message, IPC_INIT_SCRIPT};
pub use surface::{is_navigation_allowed, CapabilityProfile, ContentSurface, BLANK_URL};
pub use wry_surface::{WrySurface, WrySurfaceFactory};
