//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::TabhostApp;

impl ApplicationHandler for TabhostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Destroyed => {
                tracing::info!("Window destroyed");
                if let Some(alive) = &self.window_alive {
                    alive.set(false);
                }
                self.should_exit = true;
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_layout();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_layout();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl TabhostApp {
    /// Resize the chrome to the window and re-lay out the shown tab.
    fn sync_layout(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let bounds = self.chrome_bounds(&window);
        if let Some(chrome) = &self.chrome {
            if let Err(e) = chrome.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to resize chrome view");
            }
        }
        if let Some(tabs) = &mut self.tabs {
            tabs.on_window_resized();
        }
    }
}
