//! Headless backend that records submitted commands
//!
//! Stands in for a GPU backend wherever draw submissions need to be observed
//! rather than rasterized: tests, tooling, command-stream debugging.

use std::collections::HashSet;

use crate::render::{BackendResult, Material, MaterialId, RenderBackend, RenderError, TextureHandle, Vertex};

/// One command received by a [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    /// Selection state announced before a mesh's groups
    SelectionHighlight(bool),
    /// A texture was made resident
    LoadTexture {
        /// Material that needed the texture
        material: MaterialId,
        /// Texture that was loaded
        texture: TextureHandle,
    },
    /// A material became active
    BindMaterial(MaterialId),
    /// An indexed triangle draw
    DrawIndexedTriangles {
        /// Material bound at draw time
        material: Option<MaterialId>,
        /// Index list as submitted
        indices: Vec<u32>,
        /// Size of the vertex source the indices refer to
        vertex_count: usize,
        /// Whether edges were requested instead of fills
        wireframe: bool,
    },
}

/// Render backend that keeps every command it receives
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<RecordedCommand>,
    resident_textures: HashSet<TextureHandle>,
    bound_material: Option<MaterialId>,
    draw_failure: Option<String>,
}

impl RecordingBackend {
    /// Create a backend with an empty command log
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every draw call fail with `message`
    pub fn with_draw_failure(mut self, message: impl Into<String>) -> Self {
        self.draw_failure = Some(message.into());
        self
    }

    /// Commands received so far, in arrival order
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Draw commands received so far
    pub fn draws(&self) -> impl Iterator<Item = &RecordedCommand> + '_ {
        self.commands
            .iter()
            .filter(|command| matches!(command, RecordedCommand::DrawIndexedTriangles { .. }))
    }

    /// Number of draw calls received so far
    pub fn draw_count(&self) -> usize {
        self.draws().count()
    }

    /// Whether `texture` has been loaded
    pub fn is_resident(&self, texture: TextureHandle) -> bool {
        self.resident_textures.contains(&texture)
    }

    /// Forget recorded commands, keeping resident textures
    pub fn clear(&mut self) {
        self.commands.clear();
        self.bound_material = None;
    }
}

impl RenderBackend for RecordingBackend {
    fn bind_material(&mut self, material: &Material) -> BackendResult<()> {
        self.bound_material = Some(material.id);
        self.commands.push(RecordedCommand::BindMaterial(material.id));
        Ok(())
    }

    fn load_texture_if_needed(&mut self, material: &Material) -> BackendResult<()> {
        if let Some(texture) = material.base_color_texture {
            if self.resident_textures.insert(texture) {
                log::trace!("Loading texture {:?} for {}", texture, material.label());
                self.commands.push(RecordedCommand::LoadTexture {
                    material: material.id,
                    texture,
                });
            }
        }
        Ok(())
    }

    fn draw_indexed_triangles(&mut self, indices: &[u32], vertices: &[Vertex], wireframe: bool) -> BackendResult<()> {
        if let Some(message) = &self.draw_failure {
            return Err(RenderError::RenderingFailed(message.clone()));
        }
        self.commands.push(RecordedCommand::DrawIndexedTriangles {
            material: self.bound_material,
            indices: indices.to_vec(),
            vertex_count: vertices.len(),
            wireframe,
        });
        Ok(())
    }

    fn set_selection_highlight(&mut self, selected: bool) -> BackendResult<()> {
        self.commands.push(RecordedCommand::SelectionHighlight(selected));
        Ok(())
    }
}
