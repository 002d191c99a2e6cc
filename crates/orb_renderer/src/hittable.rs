//! Hittable trait and HitRecord for ray-object intersection.

use orb_core::{Material, Scene};
use orb_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object with a parameter strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

impl Hittable for Scene {
    /// Linear scan over the spheres in scene order, keeping the nearest hit.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut window = ray_t;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, window) {
                window = window.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}
