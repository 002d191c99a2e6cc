use crate::{unit_vector, Vec3};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// Rays are never mutated: a bounce produces a new ray from the hit point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` must already be normalized.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            crate::is_unit(direction, 1e-6),
            "ray direction {direction} is not unit length"
        );
        Self { origin, direction }
    }

    /// Create a ray from `origin` heading along `v`, normalizing `v` first.
    #[inline]
    pub fn towards(origin: Vec3, v: Vec3) -> Self {
        Self::new(origin, unit_vector(v))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vec3::Y);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, Vec3::Y);
        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_towards_normalizes() {
        let ray = Ray::towards(Vec3::ONE, Vec3::new(0.0, 3.0, 4.0));

        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!((ray.direction - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
        assert_eq!(ray.at(5.0), Vec3::new(1.0, 4.0, 5.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not unit length")]
    fn test_ray_new_rejects_unnormalized_direction() {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
    }
}
