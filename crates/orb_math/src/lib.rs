//! Orb math types.
//!
//! Vectors are glam's double precision `DVec3`.

pub use glam::DVec3;

/// 3-component vector used for positions, directions and linear colors.
pub type Vec3 = DVec3;

/// Linear RGB color.
pub type Color = Vec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Normalize `v` to unit length.
///
/// Panics if `v` is zero or its length is not finite.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    let length = v.length();
    assert!(
        length > 0.0 && length.is_finite(),
        "cannot normalize degenerate vector {v}"
    );
    v / length
}

/// Returns true if `v` has unit length within `tolerance`.
#[inline]
pub fn is_unit(v: Vec3, tolerance: f64) -> bool {
    (v.length_squared() - 1.0).abs() <= tolerance
}
