//! Vertex data and vertex storage
//!
//! A [`Vertex`] is the fixed 8-float record handed to a render backend for
//! upload: position, normal, texture coordinate, in that order. The
//! [`VertexStore`] is the append-only sequence a mesh keeps them in. Vertex
//! identity is positional: two equal records at different indices are two
//! different vertices.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{vec3_from_array, Vec3};
use crate::render::{MeshError, MeshResult};

/// 3D vertex data structure for rendering
///
/// # Memory Layout
/// `#[repr(C)]` with no padding: 32 bytes, 8 floats. The store can therefore
/// be reinterpreted as raw bytes for buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],
    
    /// Normal vector
    pub normal: [f32; 3],
    
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Number of floats in one vertex record
    pub const FLOAT_COUNT: usize = 8;

    /// Byte distance between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// Position as a math vector
    pub fn position_vec(&self) -> Vec3 {
        vec3_from_array(self.position)
    }

    /// Normal as a math vector
    pub fn normal_vec(&self) -> Vec3 {
        vec3_from_array(self.normal)
    }

    /// Flip the normal direction, keeping its magnitude
    pub fn negate_normal(&mut self) {
        for component in &mut self.normal {
            *component = -*component;
        }
    }

    /// Attribute layout of a vertex record, in field order
    pub const fn attributes() -> [VertexAttribute; 3] {
        [
            VertexAttribute { semantic: VertexSemantic::Position, location: 0, components: 3, offset: 0 },
            VertexAttribute { semantic: VertexSemantic::Normal, location: 1, components: 3, offset: 12 },
            VertexAttribute { semantic: VertexSemantic::TexCoord, location: 2, components: 2, offset: 24 },
        ]
    }
}

/// Meaning of one vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    /// Object-space position
    Position,
    /// Surface normal
    Normal,
    /// Texture coordinate
    TexCoord,
}

/// Backend-agnostic description of one attribute inside [`Vertex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// What the attribute holds
    pub semantic: VertexSemantic,
    /// Shader input location
    pub location: u32,
    /// Number of `f32` components
    pub components: u32,
    /// Byte offset from the start of the vertex
    pub offset: u32,
}

/// Append-only, randomly readable sequence of vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
}

impl VertexStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Append a vertex and return its index (the previous size)
    pub fn append(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Get the vertex at `index`
    pub fn get(&self, index: usize) -> MeshResult<&Vertex> {
        self.vertices.get(index).ok_or(MeshError::IndexOutOfRange {
            index,
            len: self.vertices.len(),
        })
    }

    /// Number of stored vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no vertex has been stored
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in index order
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Iterate over the vertices in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Vertex> {
        self.vertices.iter_mut()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }
}

impl<'a> IntoIterator for &'a VertexStore {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
