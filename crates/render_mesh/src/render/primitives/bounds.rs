//! Axis-aligned bounding volumes for meshes

use crate::foundation::math::Vec3;

/// Axis-Aligned Bounding Box
///
/// The empty box is the sentinel [`BoundingBox::empty`]: every `min`
/// component is `+inf` and every `max` component is `-inf`. No real set of
/// points can produce it, and expanding it by any point yields the box
/// around that single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl BoundingBox {
    /// Box that contains nothing
    pub fn empty() -> Self {
        Self {
            min: Vec3::repeat(f32::INFINITY),
            max: Vec3::repeat(f32::NEG_INFINITY),
        }
    }

    /// Create a new box from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        points.into_iter().fold(Self::empty(), |mut bounds, point| {
            bounds.expand(point);
            bounds
        })
    }

    /// True for the empty sentinel (or any inverted box)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include `point`
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Check if this box contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Center of the box, `None` when empty
    pub fn center(&self) -> Option<Vec3> {
        (!self.is_empty()).then(|| (self.min + self.max) * 0.5)
    }

    /// Half-size of the box, `None` when empty
    pub fn extents(&self) -> Option<Vec3> {
        (!self.is_empty()).then(|| (self.max - self.min) * 0.5)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
