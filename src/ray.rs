//! Ray representation.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line used
//! for intersection testing.

use num_traits::Float;

use crate::tensor::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
///
/// Both parts are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T = f64> {
    origin: Point3<T>,
    direction: Vec3<T>,
}

impl<T: Float> Ray<T> {
    /// Create a new ray with origin and direction.
    ///
    /// The direction does not need to be normalized.
    pub fn new(origin: Point3<T>, direction: Vec3<T>) -> Self {
        Self { origin, direction }
    }

    /// Starting point of the ray.
    pub fn origin(&self) -> Point3<T> {
        self.origin
    }

    /// Direction of the ray, as given at construction.
    pub fn direction(&self) -> Vec3<T> {
        self.direction
    }

    /// Point at parameter `t` along the ray, `origin + t * direction`.
    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction.scale(t)
    }
}
