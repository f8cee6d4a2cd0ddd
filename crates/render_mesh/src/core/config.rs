//! # Mesh Configuration
//!
//! Settings that shape how a [`Mesh`](crate::render::Mesh) allocates storage
//! and how it is handed to a render backend. Loadable from TOML or RON
//! through the [`Config`] trait.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// # Mesh Configuration
///
/// Applied when a mesh is constructed and consulted on every draw submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Number of vertices to reserve up front
    pub vertex_capacity: usize,
    /// Render edges instead of filled triangles on every submission
    pub force_wireframe: bool,
    /// Forward the mesh selection flag to the backend on submission
    pub highlight_selection: bool,
}

impl MeshConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` vertices
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// Always draw in wireframe
    pub fn with_force_wireframe(mut self, enabled: bool) -> Self {
        self.force_wireframe = enabled;
        self
    }

    /// Toggle selection highlight forwarding
    pub fn with_highlight_selection(mut self, enabled: bool) -> Self {
        self.highlight_selection = enabled;
        self
    }

    /// Check that the configuration is usable
    ///
    /// Vertex indices are 32-bit, so a reservation past `u32::MAX` vertices
    /// could never be addressed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u32::try_from(self.vertex_capacity).is_err() {
            return Err(ConfigError::Invalid(format!(
                "vertex_capacity {} exceeds the 32-bit index range",
                self.vertex_capacity
            )));
        }
        Ok(())
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 0,
            force_wireframe: false,
            highlight_selection: true,
        }
    }
}

impl Config for MeshConfig {}
