//! Backend abstraction traits for the rendering system
//!
//! This module defines the trait that rendering backends must implement
//! to receive draw submissions from meshes.

use crate::render::{Material, RenderError, Vertex};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Main rendering backend trait
///
/// Abstracts over the graphics API. A mesh submission calls, per material
/// group, [`load_texture_if_needed`](Self::load_texture_if_needed), then
/// [`bind_material`](Self::bind_material), then
/// [`draw_indexed_triangles`](Self::draw_indexed_triangles). Backends may
/// batch or reorder the resulting GPU work as they see fit.
pub trait RenderBackend {
    /// Make `material` the active material for following draws
    fn bind_material(&mut self, material: &Material) -> BackendResult<()>;

    /// Load the material's texture unless it is already resident
    fn load_texture_if_needed(&mut self, material: &Material) -> BackendResult<()>;

    /// Draw triangles from `vertices` using `indices`, three per triangle
    ///
    /// With `wireframe` set the triangles' edges are drawn instead of their
    /// filled interiors, whatever the bound material says.
    fn draw_indexed_triangles(&mut self, indices: &[u32], vertices: &[Vertex], wireframe: bool) -> BackendResult<()>;

    /// Tell the backend whether the next submitted mesh is selected
    ///
    /// Backends without a selection highlight can ignore this.
    fn set_selection_highlight(&mut self, _selected: bool) -> BackendResult<()> {
        Ok(())
    }
}
