//! Random sampling helpers.
//!
//! All samplers draw from the generator they are handed; there is no
//! process-wide random state.

use orb_math::{unit_vector, Vec3};
use rand::{Rng, RngCore};

/// Uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform point strictly inside the unit ball, by rejection sampling.
///
/// Components are drawn from [-1, 1). The zero vector is rejected as well so
/// the result can always be normalized.
pub fn random_in_unit_ball(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
            gen_f64(rng) * 2.0 - 1.0,
        );
        let len_sq = p.length_squared();
        if len_sq > 0.0 && len_sq < 1.0 {
            return p;
        }
    }
}

/// Uniform direction on the unit sphere.
#[inline]
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    unit_vector(random_in_unit_ball(rng))
}
