//! Mesh representation for 3D models
//!
//! A [`Mesh`] owns a vertex store, a registry of the materials it is drawn
//! with, and one triangle index list per material. Drawing the mesh is one
//! indexed draw per material group, which is what makes batching by material
//! work.
//!
//! # Invariants
//!
//! - `face_count * 3` equals the total number of grouped indices.
//! - Every grouped index is a valid vertex index.
//! - Every group key is a registered material.
//! - The cached bounding box, when present, equals a fresh scan of the
//!   vertex positions.
//!
//! # Concurrency
//!
//! Mutation is in place and unsynchronized. Work on independent
//! [`Mesh::clone`] results, or lock externally, to share a mesh across
//! threads.

use std::cell::Cell;
use std::sync::Arc;

use crate::core::config::{ConfigError, MeshConfig};
use crate::foundation::math::Vec3;
use crate::render::api::{BackendResult, Drawable, RenderBackend};
use crate::render::resources::materials::{Material, MaterialId, MaterialRegistry};
use crate::render::{MeshError, MeshResult};

use super::{BoundingBox, MaterialGroups, Vertex, VertexStore};

/// Indexed triangle mesh grouped by material
#[derive(Debug)]
pub struct Mesh {
    /// Vertex data
    vertices: VertexStore,
    
    /// Materials the groups are drawn with
    materials: MaterialRegistry,

    /// Triangle indices per material
    groups: MaterialGroups,

    /// Number of triangles across all groups
    face_count: usize,

    /// Memoized bounds, cleared on geometry mutation
    bounding_box: Cell<Option<BoundingBox>>,

    /// Transient view state, never copied
    selected: bool,

    config: MeshConfig,
}

impl Mesh {
    /// Create an empty mesh with the default configuration
    pub fn new() -> Self {
        Self::from_parts(MeshConfig::default())
    }

    /// Create an empty mesh from a validated configuration
    pub fn with_config(config: MeshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: MeshConfig) -> Self {
        Self {
            vertices: VertexStore::with_capacity(config.vertex_capacity),
            materials: MaterialRegistry::new(),
            groups: MaterialGroups::new(),
            face_count: 0,
            bounding_box: Cell::new(None),
            selected: false,
            config,
        }
    }

    /// Number of triangles
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Number of stored vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of registered materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Vertex storage, read-only
    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }

    /// Vertex at `index`
    pub fn vertex(&self, index: usize) -> MeshResult<&Vertex> {
        self.vertices.get(index)
    }

    /// Position of the vertex at `index`
    pub fn vertex_position(&self, index: usize) -> MeshResult<Vec3> {
        self.vertices.get(index).map(Vertex::position_vec)
    }

    /// Triangle indices grouped by material, read-only
    pub fn material_groups(&self) -> &MaterialGroups {
        &self.groups
    }

    /// Material registry, read-only
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Material registered under `id`
    pub fn material(&self, id: MaterialId) -> Option<&Arc<Material>> {
        self.materials.lookup(id)
    }

    /// Whether a material is registered under `id`
    pub fn contains_material(&self, id: MaterialId) -> bool {
        self.materials.contains(id)
    }

    /// Identifier of a registered material equal to `material`
    pub fn material_index(&self, material: &Material) -> Option<MaterialId> {
        self.materials.index_of(material)
    }

    /// Register `material` under `id`, replacing any earlier registration
    pub fn add_material(&mut self, id: MaterialId, material: Arc<Material>) {
        self.materials.add(id, material);
    }

    /// Mesh configuration
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Whether the mesh is currently selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Add triangles that share one material
    ///
    /// `vertices` is read three at a time, one triangle per triple. Every
    /// vertex is appended to the store and its new index is appended to the
    /// material's group. The material is registered unless its identifier is
    /// already registered, or an equal material already is (then the
    /// triangles join that material's group instead).
    ///
    /// Triangles are not checked for degeneracy.
    ///
    /// Returns the identifier the triangles were grouped under.
    ///
    /// # Errors
    /// [`MeshError::InvalidArgument`] when the vertex count is not a positive
    /// multiple of three, or when the new vertices would not be addressable
    /// by 32-bit indices. The mesh is unchanged in that case.
    pub fn add_triangles(&mut self, vertices: &[Vertex], material: &Arc<Material>) -> MeshResult<MaterialId> {
        if vertices.is_empty() || vertices.len() % 3 != 0 {
            return Err(MeshError::InvalidArgument(format!(
                "vertex count must form whole triangles, got {}",
                vertices.len()
            )));
        }
        let end = self.vertices.len() + vertices.len();
        if u32::try_from(end).is_err() {
            return Err(MeshError::InvalidArgument(format!(
                "mesh would hold {} vertices, past the 32-bit index range",
                end
            )));
        }

        let id = self.resolve_material(material);

        self.vertices.reserve(vertices.len());
        let indices: Vec<u32> = vertices.iter().map(|v| self.vertices.append(*v)).collect();
        self.groups.extend(id, indices);

        let added = vertices.len() / 3;
        self.face_count += added;
        self.bounding_box.set(None);

        log::debug!("Added {} triangles with {} ({} total)", added, id, self.face_count);
        Ok(id)
    }

    /// Pick the group key for `material`, registering it if it is new
    fn resolve_material(&mut self, material: &Arc<Material>) -> MaterialId {
        if self.materials.contains(material.id) {
            return material.id;
        }
        if let Some(existing) = self.materials.index_of(material) {
            log::debug!("{} matches registered {}, reusing it", material.label(), existing);
            return existing;
        }
        self.materials.add(material.id, Arc::clone(material));
        material.id
    }

    /// Axis-aligned bounds of every vertex position
    ///
    /// Computed by a full scan on first request after a mutation, then
    /// served from cache. An empty mesh yields [`BoundingBox::empty`].
    pub fn bounding_box(&self) -> BoundingBox {
        if let Some(bounds) = self.bounding_box.get() {
            return bounds;
        }
        let bounds = BoundingBox::from_points(self.vertices.iter().map(Vertex::position_vec));
        log::debug!("Computed bounding box over {} vertices", self.vertices.len());
        self.bounding_box.set(Some(bounds));
        bounds
    }

    /// Turn the mesh inside out
    ///
    /// Negates every vertex normal and flips the winding of every triangle
    /// together, so front-face determination stays consistent with the
    /// normals. Applying it twice restores the original mesh.
    pub fn reverse_normals(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.negate_normal();
        }
        self.groups.reverse_winding();
        self.bounding_box.set(None);
        log::debug!("Reversed normals of {} vertices, {} faces", self.vertices.len(), self.face_count);
    }

    /// Issue one indexed draw per material group to `backend`
    ///
    /// For each group the material's texture is made resident, the material is
    /// bound and the group's indices are drawn. Group order is unspecified.
    /// Stored data is never modified.
    ///
    /// # Errors
    /// Backend failures are returned as-is; a group whose material is not
    /// registered yields [`MeshError::MaterialNotFound`].
    pub fn submit<B>(&self, backend: &mut B, wireframe_override: bool) -> BackendResult<()>
    where
        B: RenderBackend + ?Sized,
    {
        let wireframe = wireframe_override || self.config.force_wireframe;
        if self.config.highlight_selection {
            backend.set_selection_highlight(self.selected)?;
        }

        for (id, indices) in self.groups.iter() {
            let material = self.materials.lookup(id).ok_or(MeshError::MaterialNotFound(id))?;
            backend.load_texture_if_needed(material)?;
            backend.bind_material(material)?;
            log::trace!("Drawing {} indices with {}", indices.len(), material.label());
            backend.draw_indexed_triangles(indices, self.vertices.as_slice(), wireframe)?;
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Mesh {
    /// Copy geometry and groups, share materials, drop the selection
    fn clone(&self) -> Self {
        log::debug!("Cloning mesh with {} faces", self.face_count);
        Self {
            vertices: self.vertices.clone(),
            materials: self.materials.clone(),
            groups: self.groups.clone(),
            face_count: self.face_count,
            bounding_box: Cell::new(self.bounding_box.get()),
            selected: false,
            config: self.config.clone(),
        }
    }
}

impl Drawable for Mesh {
    fn bounding_box(&self) -> BoundingBox {
        Mesh::bounding_box(self)
    }

    fn submit(&self, backend: &mut dyn RenderBackend, wireframe_override: bool) -> BackendResult<()> {
        Mesh::submit(self, backend, wireframe_override)
    }

    fn clone_drawable(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::resources::materials::UnlitMaterialParams;

    fn material(id: u32) -> Arc<Material> {
        Arc::new(Material::unlit(MaterialId(id), UnlitMaterialParams::default()))
    }

    fn triangle(z: f32) -> [Vertex; 3] {
        [
            Vertex::new([0.0, 0.0, z], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([1.0, 0.0, z], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([0.0, 1.0, z], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.material_count(), 0);
        assert!(mesh.material_groups().is_empty());
        assert!(mesh.bounding_box().is_empty());
        assert!(!mesh.is_selected());
    }

    #[test]
    fn test_with_config_reserves_capacity() {
        let mesh = Mesh::with_config(MeshConfig::new().with_vertex_capacity(30)).unwrap();
        assert_eq!(mesh.config().vertex_capacity, 30);
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_add_triangles_rejects_partial_triangles() {
        let mut mesh = Mesh::new();
        let m = material(1);
        mesh.add_triangles(&triangle(0.0), &m).unwrap();

        for bad in [0usize, 1, 2, 4, 5] {
            let vertices = vec![Vertex::default(); bad];
            let result = mesh.add_triangles(&vertices, &m);
            assert!(matches!(result, Err(MeshError::InvalidArgument(_))), "count {}", bad);
        }
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.material_groups().index_count(), 3);
    }

    #[test]
    fn test_rejected_material_is_not_registered() {
        let mut mesh = Mesh::new();
        let result = mesh.add_triangles(&[Vertex::default(); 2], &material(8));
        assert!(result.is_err());
        assert!(!mesh.contains_material(MaterialId(8)));
    }

    #[test]
    fn test_registered_id_keeps_its_material() {
        let mut mesh = Mesh::new();
        let first = material(1);
        let reused_id = Arc::new(
            Material::unlit(MaterialId(1), UnlitMaterialParams { color: Vec3::new(0.0, 1.0, 0.0), alpha: 1.0 }),
        );

        mesh.add_triangles(&triangle(0.0), &first).unwrap();
        let id = mesh.add_triangles(&triangle(1.0), &reused_id).unwrap();

        assert_eq!(id, MaterialId(1));
        assert!(Arc::ptr_eq(mesh.material(MaterialId(1)).unwrap(), &first));
        assert_eq!(mesh.material_count(), 1);
    }

    #[test]
    fn test_vertex_position_bounds_checked() {
        let mut mesh = Mesh::new();
        mesh.add_triangles(&triangle(2.0), &material(1)).unwrap();

        assert_eq!(mesh.vertex_position(1).unwrap(), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(
            mesh.vertex_position(3),
            Err(MeshError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(mesh.vertex(7).is_err());
    }

    #[test]
    fn test_bounding_box_cache_invalidated_on_add() {
        let mut mesh = Mesh::new();
        let m = material(1);
        mesh.add_triangles(&triangle(0.0), &m).unwrap();
        assert_eq!(mesh.bounding_box().max.z, 0.0);

        mesh.add_triangles(&triangle(5.0), &m).unwrap();
        let bounds = mesh.bounding_box();
        assert_eq!(bounds.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn test_reverse_normals_keeps_positions_and_counts() {
        let mut mesh = Mesh::new();
        let m = material(1);
        mesh.add_triangles(&triangle(0.0), &m).unwrap();
        let bounds = mesh.bounding_box();

        mesh.reverse_normals();

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex(0).unwrap().position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertex(0).unwrap().normal, [-0.0, -0.0, -1.0]);
        assert_eq!(mesh.material_groups().group(MaterialId(1)), Some(&[0, 2, 1][..]));
        assert_eq!(mesh.bounding_box(), bounds);
    }

    #[test]
    fn test_clone_resets_selection() {
        let mut mesh = Mesh::new();
        mesh.add_triangles(&triangle(0.0), &material(1)).unwrap();
        mesh.set_selected(true);

        let copy = mesh.clone();
        assert!(mesh.is_selected());
        assert!(!copy.is_selected());
        assert_eq!(copy.face_count(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut mesh = Mesh::new();
        let m = material(1);
        mesh.add_triangles(&triangle(0.0), &m).unwrap();

        let mut copy = mesh.clone();
        copy.add_triangles(&triangle(3.0), &m).unwrap();
        copy.reverse_normals();

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex(0).unwrap().normal, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.bounding_box().max.z, 0.0);
        assert_eq!(copy.bounding_box().max.z, 3.0);
    }
}
