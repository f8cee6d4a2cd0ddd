//! # Rendering System
//!
//! Mesh geometry, per-mesh material bookkeeping and the boundary to whatever
//! graphics API actually rasterizes the triangles.
//!
//! ## Architecture
//!
//! - **Primitives**: vertices, bounding boxes, material groups and the [`Mesh`] aggregate
//! - **Resources**: shared [`Material`]s and the per-mesh [`MaterialRegistry`]
//! - **API**: the [`RenderBackend`] commands a mesh issues and the [`Drawable`] capability
//!
//! The mesh never talks to a graphics API itself. Drawing a mesh means
//! handing each material group to a backend.

use thiserror::Error;

pub mod api;
pub mod primitives;
pub mod resources;

#[cfg(test)]
mod tests;

pub use api::{BackendResult, Drawable, RecordedCommand, RecordingBackend, RenderBackend};
pub use primitives::{BoundingBox, MaterialGroups, Mesh, Vertex, VertexAttribute, VertexSemantic, VertexStore};
pub use resources::materials::{
    Material, MaterialId, MaterialRegistry, MaterialType, StandardMaterialParams, TextureHandle,
    UnlitMaterialParams,
};

/// Structural mesh errors
///
/// Raised before any state changes: an operation that returns one of these
/// has left the mesh exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// An argument violates an operation precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex index is past the end of the vertex store
    #[error("Vertex index {index} out of range (vertex count {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Vertex count at the time of the request
        len: usize,
    },

    /// A material group refers to a material the mesh never registered
    #[error("Material {0} is not registered")]
    MaterialNotFound(MaterialId),
}

/// Result type for mesh operations
pub type MeshResult<T> = Result<T, MeshError>;

/// High-level rendering error types
///
/// Errors surfaced across the backend boundary, abstracted from any specific
/// graphics API error type.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A rendering operation failed during execution
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),
    
    /// Resource creation or management failed
    ///
    /// Typically a texture that could not be made resident.
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),
    
    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    BackendError(String),

    /// The mesh being drawn is structurally inconsistent
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
