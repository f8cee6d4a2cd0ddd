//! # Render Mesh
//!
//! Indexed triangle meshes grouped by material, built for batched draw
//! submission.
//!
//! ## Features
//!
//! - **Material Batching**: one index list per material, one draw per list
//! - **Shared Materials**: materials are `Arc`-shared between meshes and deduplicated by value
//! - **Incremental Construction**: triangles are added in whole-triangle batches
//! - **Cached Bounds**: axis-aligned bounding box computed on demand
//! - **Backend Agnostic**: drawing goes through the [`RenderBackend`](render::RenderBackend) trait
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use render_mesh::prelude::*;
//!
//! let material = Arc::new(Material::unlit(MaterialId(1), UnlitMaterialParams::default()));
//! let mut mesh = Mesh::new();
//! mesh.add_triangles(&[
//!     Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
//!     Vertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
//!     Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
//! ], &material)?;
//!
//! let mut backend = RecordingBackend::new();
//! mesh.submit(&mut backend, false)?;
//! assert_eq!(backend.draw_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::MeshConfig,
        foundation::math::{Vec2, Vec3},
        render::{
            BackendResult, BoundingBox, Drawable, Material, MaterialId, MaterialRegistry, MaterialType,
            Mesh, MeshError, MeshResult, RecordingBackend, RenderBackend, RenderError,
            StandardMaterialParams, TextureHandle, UnlitMaterialParams, Vertex,
        },
    };
}
