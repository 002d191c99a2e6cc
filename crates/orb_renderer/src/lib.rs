//! Orb Renderer - CPU path tracing of spheres under a procedural sky.
//!
//! A Monte Carlo path tracer with:
//! - Jittered multi-sampling for anti-aliasing
//! - Recursive diffuse bounces attenuated by material absorption
//! - A fixed bounce budget that terminates every light path
//!
//! Every random draw goes through an explicit `RngCore` so a render can be
//! seeded and reproduced.

mod camera;
mod hittable;
mod ppm;
mod renderer;
mod sampling;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use ppm::{color_to_rgb, encode_ppm, ppm_header, to_byte, write_ppm};
pub use renderer::{
    ray_color, render, render_pixel, sky_gradient, ImageBuffer, RenderConfig, HIT_EPSILON,
};
pub use sampling::{gen_f64, random_in_unit_ball, random_unit_vector};
pub use sphere::intersect_sphere;

/// Re-export the scene model and math types.
pub use orb_core::{Material, Scene, Sphere};
pub use orb_math::{Color, Interval, Ray, Vec3};
