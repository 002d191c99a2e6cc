//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use orb_core::Sphere;
use orb_math::{unit_vector, Interval, Ray};

/// Intersect a ray with a sphere.
///
/// The ray direction is unit length, so the quadratic's `a` term is 1. Returns
/// the nearer root when it lies in front of the origin, otherwise the farther
/// root. Only a negative discriminant yields `None`; the returned `t` may still
/// be negative or tiny and has to be filtered by the caller.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let oc = ray.origin() - sphere.center;
    let b = 2.0 * oc.dot(ray.direction());
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let near = -b - sqrtd;
    if near > 0.0 {
        Some(near / 2.0)
    } else {
        Some((-b + sqrtd) / 2.0)
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let t = intersect_sphere(ray, self)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: unit_vector(p - self.center),
            material: &self.material,
            t,
        })
    }
}
