//! Backend-facing API
//!
//! The commands a mesh issues while drawing, and the capability trait a
//! scene graph uses to handle meshes polymorphically.

pub mod drawable;
pub mod recording_backend;
pub mod render_backend;

pub use drawable::Drawable;
pub use recording_backend::{RecordedCommand, RecordingBackend};
pub use render_backend::{BackendResult, RenderBackend};
