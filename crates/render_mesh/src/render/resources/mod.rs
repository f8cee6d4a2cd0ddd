//! Rendering resources shared between meshes

pub mod materials;
