//! Math utilities and types
//!
//! Provides the small set of math types the mesh core works with.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Convert a packed `[x, y, z]` array into a [`Vec3`]
#[inline]
pub fn vec3_from_array(values: [f32; 3]) -> Vec3 {
    Vec3::new(values[0], values[1], values[2])
}
