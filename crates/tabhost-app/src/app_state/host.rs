//! The winit window as seen by the tab controller.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use tabhost_common::Size;
use tabhost_tabs::ContentHost;
use winit::window::Window;

pub(crate) struct WinitHost {
    window: Arc<Window>,
    alive: Rc<Cell<bool>>,
}

impl WinitHost {
    /// Returns the host and the flag the event loop clears once the
    /// window is destroyed.
    pub(crate) fn new(window: Arc<Window>) -> (Self, Rc<Cell<bool>>) {
        let alive = Rc::new(Cell::new(true));
        (
            Self {
                window,
                alive: Rc::clone(&alive),
            },
            alive,
        )
    }
}

impl ContentHost for WinitHost {
    fn content_size(&self) -> Size {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Size::new(size.width, size.height)
    }

    fn is_alive(&self) -> bool {
        self.alive.get()
    }
}
