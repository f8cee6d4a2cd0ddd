//! Material system
//!
//! Material definitions and the per-mesh material registry.

pub mod material;
pub mod material_params;
pub mod material_registry;

// Re-export commonly used types
pub use material::{Material, MaterialType, MaterialId, TextureHandle};
pub use material_params::{StandardMaterialParams, UnlitMaterialParams};
pub use material_registry::MaterialRegistry;
