//! Material registry for per-mesh material lookup and deduplication
//!
//! Maps caller-assigned [`MaterialId`]s to shared material references. The
//! registry never copies a material: it stores the `Arc` it was given, so a
//! material stays alive for as long as any registry (or anyone else) still
//! points at it.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Material, MaterialId};

/// Identifier to shared material mapping
///
/// Registration order is remembered so that [`MaterialRegistry::index_of`]
/// resolves to the earliest registered equal material.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    /// All registered materials
    materials: HashMap<MaterialId, Arc<Material>>,
    /// Identifiers in first-registration order
    order: Vec<MaterialId>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `material` under `id`, replacing any earlier registration
    ///
    /// Returns the material previously registered under `id`.
    pub fn add(&mut self, id: MaterialId, material: Arc<Material>) -> Option<Arc<Material>> {
        match self.materials.get(&id) {
            Some(existing) => {
                if !Arc::ptr_eq(existing, &material) && **existing != *material {
                    log::warn!("Replacing {} with a different material", existing.label());
                }
            }
            None => {
                log::debug!("Registered {} under {}", material.label(), id);
                self.order.push(id);
            }
        }
        self.materials.insert(id, material)
    }

    /// Get the material registered under `id`
    pub fn lookup(&self, id: MaterialId) -> Option<&Arc<Material>> {
        self.materials.get(&id)
    }

    /// Whether `id` has a registration
    pub fn contains(&self, id: MaterialId) -> bool {
        self.materials.contains_key(&id)
    }

    /// Identifier of the first registered material equal to `candidate`
    ///
    /// Uses the material's value equality, not reference identity. `None` is
    /// the "not found" answer, not an error.
    pub fn index_of(&self, candidate: &Material) -> Option<MaterialId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.materials.get(id).is_some_and(|m| **m == *candidate))
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Registered identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.order.iter().copied()
    }

    /// Registered `(id, material)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Arc<Material>)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.materials.get(id).map(|m| (*id, m)))
    }
}
