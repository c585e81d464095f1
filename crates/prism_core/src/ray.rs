//! Rays and the object ids they can be told to skip.

use std::fmt;

use prism_math::Vec3;

/// Stable 1-based handle of an object inside a [`Scene`](crate::Scene).
///
/// Ids are assigned in insertion order, so `id.index()` is the object's
/// position in the scene's object list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Id of the object stored at `index` in the scene.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Position of the object in the scene's object list.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The raw 1-based id.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ray with origin, unit direction and an optional object to ignore.
///
/// Secondary rays spawned on a surface carry the id of that surface so
/// the closest-hit query cannot report the surface they start on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Always unit length
    pub direction: Vec3,
    pub ignore: Option<ObjectId>,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            ignore: None,
        }
    }

    /// Make this ray skip `id` during intersection queries.
    pub fn ignoring(mut self, id: ObjectId) -> Self {
        self.ignore = Some(id);
        self
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
