//! Drawable capability
//!
//! What a scene graph needs from a piece of geometry: its bounds, a way to
//! draw it and a way to duplicate it.

use crate::render::{BackendResult, BoundingBox, RenderBackend};

/// Geometry a scene graph can cull, draw and duplicate
pub trait Drawable {
    /// Axis-aligned bounds of the geometry
    fn bounding_box(&self) -> BoundingBox;

    /// Issue the draw commands for this geometry to `backend`
    fn submit(&self, backend: &mut dyn RenderBackend, wireframe_override: bool) -> BackendResult<()>;

    /// Independent copy of this geometry
    fn clone_drawable(&self) -> Box<dyn Drawable>;
}
