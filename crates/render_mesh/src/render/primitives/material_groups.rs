//! Per-material triangle index groups
//!
//! Each group is the index list of every triangle drawn with one material.
//! Group lengths are always a multiple of three; iteration order over groups
//! is unspecified.

use std::collections::HashMap;

use crate::render::resources::materials::MaterialId;

/// Material identifier to triangle index list mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialGroups {
    groups: HashMap<MaterialId, Vec<u32>>,
}

impl MaterialGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices drawn with material `id`
    pub fn group(&self, id: MaterialId) -> Option<&[u32]> {
        self.groups.get(&id).map(Vec::as_slice)
    }

    /// Whether a group exists for `id`
    pub fn contains(&self, id: MaterialId) -> bool {
        self.groups.contains_key(&id)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no triangle has been grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of indices across all groups
    pub fn index_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate over `(material, indices)` in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &[u32])> + '_ {
        self.groups.iter().map(|(id, indices)| (*id, indices.as_slice()))
    }

    /// Material identifiers that own a group
    pub fn ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.groups.keys().copied()
    }

    /// Append whole triangles to the group for `id`, creating it if absent
    pub(crate) fn extend(&mut self, id: MaterialId, indices: impl IntoIterator<Item = u32>) {
        let group = self.groups.entry(id).or_default();
        group.extend(indices);
        debug_assert_eq!(group.len() % 3, 0);
    }

    /// Swap the last two corners of every triangle, flipping its winding
    pub(crate) fn reverse_winding(&mut self) {
        for indices in self.groups.values_mut() {
            for triangle in indices.chunks_exact_mut(3) {
                triangle.swap(1, 2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_creates_and_appends() {
        let mut groups = MaterialGroups::new();
        groups.extend(MaterialId(1), [0, 1, 2]);
        groups.extend(MaterialId(1), [3, 4, 5]);
        groups.extend(MaterialId(2), [6, 7, 8]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.group(MaterialId(1)), Some(&[0, 1, 2, 3, 4, 5][..]));
        assert_eq!(groups.group(MaterialId(2)), Some(&[6, 7, 8][..]));
        assert_eq!(groups.group(MaterialId(3)), None);
        assert_eq!(groups.index_count(), 9);
    }

    #[test]
    fn test_reverse_winding_swaps_last_two_corners() {
        let mut groups = MaterialGroups::new();
        groups.extend(MaterialId(1), [0, 1, 2, 3, 4, 5]);

        groups.reverse_winding();
        assert_eq!(groups.group(MaterialId(1)), Some(&[0, 2, 1, 3, 5, 4][..]));

        groups.reverse_winding();
        assert_eq!(groups.group(MaterialId(1)), Some(&[0, 1, 2, 3, 4, 5][..]));
    }
}
