//! Tab and content-surface orchestration.
//!
//! Keeps exactly one content surface attached to the host window, in sync
//! with the active tab, and exposes the request/response protocol the UI
//! drives. Engine metadata streams back to the UI as sparse patches.
//!
//! - `registry`: tab id -> surface map plus the active pointer
//! - `layout`: visible rectangle for the active surface
//! - `attachment`: which surface the window shows
//! - `controller`: create/switch/close/navigate state machine
//! - `relay`: engine events -> UI events
//! - `protocol`: wire types for commands, responses and events
//! - `mirror`: the UI's eventually-consistent copy of the tab list

pub mod address;
pub mod attachment;
pub mod controller;
pub mod layout;
pub mod mirror;
pub mod protocol;
pub mod registry;
pub mod relay;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use address::AddressResolver;
pub use attachment::{Attachment, ContentHost};
pub use controller::TabController;
pub use layout::{compute_bounds, ChromeGeometry};
pub use mirror::{MirrorAction, MirrorTab, UiMirror};
pub use protocol::{
    AckResponse, CloseTabResponse, Command, CreateTabResponse, NavigateResponse, Request, Response,
    ResponseEnvelope, TabPatch, UiEvent,
};
pub use registry::TabRegistry;
pub use relay::{MetadataRelay, UiEventSink};
