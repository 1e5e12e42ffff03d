use tabhost_common::SurfaceError;

use crate::events::SurfaceEmitter;
use crate::surface::{CapabilityProfile, ContentSurface};

/// Builds content surfaces with a fixed capability profile.
///
/// `create` starts loading `url` immediately and returns without waiting
/// for it. A bad URL is not an error here: the failure shows up later as a
/// load-stopped event on `emitter`. `Err` means the engine could not build
/// a surface at all.
pub trait SurfaceFactory {
    type Surface: ContentSurface;

    fn profile(&self) -> &CapabilityProfile;

    fn create(&mut self, url: &str, emitter: SurfaceEmitter) -> Result<Self::Surface, SurfaceError>;
}
