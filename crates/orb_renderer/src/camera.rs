//! Camera for ray generation.

use crate::sampling::gen_f64;
use orb_math::{Ray, Vec3};
use rand::RngCore;

/// Pinhole camera at the origin looking down +Z.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Lens settings
    viewport_height: f64,
    focal_length: f64,

    // Cached computed values (set by initialize())
    left: f64,
    top: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Camera {
    /// Create a new camera with default settings (800x600).
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            viewport_height: 2.0,
            focal_length: 1.0,
            left: 0.0,
            top: 0.0,
            pixel_width: 0.0,
            pixel_height: 0.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the viewport height (world units) and the distance to the viewport.
    pub fn with_lens(mut self, viewport_height: f64, focal_length: f64) -> Self {
        self.viewport_height = viewport_height;
        self.focal_length = focal_length;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        debug_assert!(
            self.image_width > 0 && self.image_height > 0,
            "image resolution must be non-zero"
        );

        let aspect = self.image_width as f64 / self.image_height as f64;
        let viewport_width = self.viewport_height * aspect;

        self.left = -viewport_width / 2.0;
        self.top = self.viewport_height / 2.0;
        self.pixel_width = viewport_width / self.image_width as f64;
        self.pixel_height = self.viewport_height / self.image_height as f64;
    }

    /// Generate a ray through pixel (i, j) at a random position inside the pixel.
    ///
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let u = gen_f64(rng);
        let v = gen_f64(rng);

        let px = self.left + self.pixel_width * (i as f64 + u);
        let py = self.top - self.pixel_height * (j as f64 + v);

        Ray::towards(Vec3::ZERO, Vec3::new(px, py, self.focal_length))
    }

    /// Direction through the exact center of pixel (i, j), without jitter.
    pub fn pixel_center_direction(&self, i: u32, j: u32) -> Vec3 {
        let px = self.left + self.pixel_width * (i as f64 + 0.5);
        let py = self.top - self.pixel_height * (j as f64 + 0.5);
        orb_math::unit_vector(Vec3::new(px, py, self.focal_length))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_camera_initialize() {
        let mut camera = Camera::new().with_resolution(800, 600);
        camera.initialize();

        // Viewport is 2 units tall and 2 * 4/3 wide
        assert!((camera.top - 1.0).abs() < 1e-12);
        assert!((camera.left + 4.0 / 3.0).abs() < 1e-12);
        assert!((camera.pixel_width - (8.0 / 3.0) / 800.0).abs() < 1e-15);
        assert!((camera.pixel_height - 2.0 / 600.0).abs() < 1e-15);
    }

    #[test]
    fn test_camera_ray_direction() {
        let mut camera = Camera::new().with_resolution(100, 100);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(42);

        // Center ray should point roughly towards +Z
        let ray = camera.get_ray(50, 50, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!(ray.direction().z > 0.99);
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);

        // Top-left pixel looks up and left, bottom-right looks down and right
        let top_left = camera.get_ray(0, 0, &mut rng).direction();
        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        let bottom_right = camera.get_ray(99, 99, &mut rng).direction();
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_jitter_stays_inside_pixel() {
        let mut camera = Camera::new().with_resolution(40, 20);
        camera.initialize();
        let mut rng = StdRng::seed_from_u64(5);

        let (i, j) = (13, 7);
        let x_min = camera.left + camera.pixel_width * i as f64;
        let y_max = camera.top - camera.pixel_height * j as f64;

        let mut distinct = false;
        let first = camera.get_ray(i, j, &mut rng).direction();
        for _ in 0..500 {
            let d = camera.get_ray(i, j, &mut rng).direction();
            // Project back onto the viewport plane at the focal length
            let px = d.x / d.z * camera.focal_length;
            let py = d.y / d.z * camera.focal_length;

            assert!(px >= x_min - 1e-12 && px < x_min + camera.pixel_width + 1e-12);
            assert!(py <= y_max + 1e-12 && py > y_max - camera.pixel_height - 1e-12);
            distinct |= d != first;
        }
        assert!(distinct, "jitter should vary the sample position");
    }

    #[test]
    fn test_with_lens() {
        let mut camera = Camera::new().with_resolution(10, 10).with_lens(4.0, 2.0);
        camera.initialize();

        let d = camera.pixel_center_direction(0, 0);
        let expected = orb_math::unit_vector(Vec3::new(-1.8, 1.8, 2.0));
        assert!((d - expected).length() < 1e-12);
    }
}
