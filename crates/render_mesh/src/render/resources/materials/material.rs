//! Material definitions
//!
//! A [`Material`] is owned outside any mesh and shared between meshes through
//! `Arc<Material>`. Two materials are the same material when their rendering
//! properties match; the identifier and debug name take no part in that.

use super::{StandardMaterialParams, UnlitMaterialParams};

/// Caller-assigned material identifier, unique within one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "material#{}", self.0)
    }
}

/// Opaque handle to a texture the render backend knows how to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Enumeration of supported material types
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialType {
    /// Standard PBR material with full physically-based rendering
    StandardPbr(StandardMaterialParams),
    /// Unlit material for simple color/texture rendering
    Unlit(UnlitMaterialParams),
}

/// Material resource referenced by mesh material groups
#[derive(Debug, Clone)]
pub struct Material {
    /// Identifier the material's triangles are grouped under
    pub id: MaterialId,
    /// Material type and parameters
    pub material_type: MaterialType,
    /// Base color texture, if any
    pub base_color_texture: Option<TextureHandle>,
    /// Optional name for debugging
    pub name: Option<String>,
}

impl Material {
    /// Create a new standard PBR material
    pub fn standard_pbr(id: MaterialId, params: StandardMaterialParams) -> Self {
        Self {
            id,
            material_type: MaterialType::StandardPbr(params),
            base_color_texture: None,
            name: None,
        }
    }

    /// Create a new unlit material
    pub fn unlit(id: MaterialId, params: UnlitMaterialParams) -> Self {
        Self {
            id,
            material_type: MaterialType::Unlit(params),
            base_color_texture: None,
            name: None,
        }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a base color texture
    pub fn with_base_color_texture(mut self, texture: TextureHandle) -> Self {
        self.base_color_texture = Some(texture);
        self
    }

    /// Whether drawing with this material needs a texture resident
    pub fn has_texture(&self) -> bool {
        self.base_color_texture.is_some()
    }

    /// Label for log output
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.to_string(),
        }
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.material_type == other.material_type
            && self.base_color_texture == other.base_color_texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_equality_ignores_id_and_name() {
        let a = Material::unlit(MaterialId(1), UnlitMaterialParams::default()).with_name("A");
        let b = Material::unlit(MaterialId(2), UnlitMaterialParams::default()).with_name("B");
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_compares_rendering_properties() {
        let red = Material::unlit(MaterialId(1), UnlitMaterialParams {
            color: Vec3::new(1.0, 0.0, 0.0),
            alpha: 1.0,
        });
        let white = Material::unlit(MaterialId(1), UnlitMaterialParams::default());
        assert_ne!(red, white);

        let textured = white.clone().with_base_color_texture(TextureHandle(7));
        assert_ne!(textured, white);
        assert!(textured.has_texture());

        let pbr = Material::standard_pbr(MaterialId(1), StandardMaterialParams::default());
        assert_ne!(pbr, white);
    }

    #[test]
    fn test_label() {
        let named = Material::unlit(MaterialId(3), UnlitMaterialParams::default()).with_name("Hull");
        assert_eq!(named.label(), "Hull (material#3)");
        let anonymous = Material::unlit(MaterialId(4), UnlitMaterialParams::default());
        assert_eq!(anonymous.label(), "material#4");
    }
}
