//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive diffuse bounces with a fixed depth budget
//! - Absorption-only attenuation (optionally tinted by albedo)
//! - Anti-aliasing via jittered multi-sampling

use std::time::Instant;

use crate::sampling::random_unit_vector;
use crate::{Camera, Hittable};
use orb_math::{unit_vector, Color, Interval, Ray};
use rand::RngCore;

/// Minimum ray parameter accepted as a hit, to avoid bounce rays
/// re-hitting the surface they start on.
pub const HIT_EPSILON: f64 = 1e-6;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Multiply bounced light by the hit material's color
    pub tint_by_albedo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_depth: 10,
            tint_by_albedo: false,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Misses return the sky whatever the remaining depth. A hit with no depth
/// left contributes black; otherwise the ray bounces once in a diffuse
/// direction and the result is scaled by the surface's retained fraction.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(HIT_EPSILON, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    // Out of bounce budget: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let mut scatter_direction = rec.normal + random_unit_vector(rng);

    // Catch degenerate scatter direction
    if scatter_direction.length_squared() < 1e-12 {
        scatter_direction = rec.normal;
    }

    let scattered = Ray::new(rec.p, unit_vector(scatter_direction));
    let incoming = ray_color(&scattered, world, depth - 1, config, rng);

    let attenuated = incoming * rec.material.retained();
    if config.tint_by_albedo {
        attenuated * rec.material.color
    } else {
        attenuated
    }
}

/// Sky gradient: white at the horizon blending to blue at the zenith.
pub fn sky_gradient(ray: &Ray) -> Color {
    let a = 0.5 * (ray.direction().y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel.max(1) as f64
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer, top row first.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
        log::trace!("Row {}/{} done", y + 1, camera.image_height);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
