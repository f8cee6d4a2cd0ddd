//! Core primitive types for rendering
//!
//! This module contains the geometry data structures a mesh is built from.

pub mod bounds;
pub mod material_groups;
pub mod mesh;
pub mod vertex;

// Re-export commonly used types
pub use bounds::BoundingBox;
pub use material_groups::MaterialGroups;
pub use mesh::Mesh;
pub use vertex::{Vertex, VertexAttribute, VertexSemantic, VertexStore};
