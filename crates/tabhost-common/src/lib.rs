pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, SurfaceError, TabhostError};
pub use events::EventBus;
pub use id::TabId;
pub use types::{Bounds, Size};

pub type Result<T> = std::result::Result<T, TabhostError>;
