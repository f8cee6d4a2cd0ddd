//! Material parameter types for different material workflows

use crate::foundation::math::Vec3;

/// Standard material parameters for PBR rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterialParams {
    /// Base color (albedo) - RGB values
    pub base_color: Vec3,
    /// Alpha transparency value
    pub alpha: f32,
    /// Metallic factor (0.0 = dielectric, 1.0 = metallic)
    pub metallic: f32,
    /// Roughness factor (0.0 = mirror, 1.0 = completely rough)
    pub roughness: f32,
    /// Emission color for self-illuminated materials
    pub emission: Vec3,
}

impl Default for StandardMaterialParams {
    fn default() -> Self {
        Self {
            base_color: Vec3::new(0.8, 0.8, 0.8),
            alpha: 1.0,
            metallic: 0.0,
            roughness: 0.5,
            emission: Vec3::zeros(),
        }
    }
}

/// Unlit material parameters for simple shading
#[derive(Debug, Clone, PartialEq)]
pub struct UnlitMaterialParams {
    /// Material color
    pub color: Vec3,
    /// Alpha transparency
    pub alpha: f32,
}

impl Default for UnlitMaterialParams {
    fn default() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            alpha: 1.0,
        }
    }
}
