//! Scene types for Orb.
//!
//! A scene is an ordered list of spheres. The renderer borrows it for the
//! duration of a render and never mutates it.

use orb_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Fraction of light absorbed when a scene file leaves it unspecified.
pub const DEFAULT_ABSORPTION: f64 = 0.5;

fn default_absorption() -> f64 {
    DEFAULT_ABSORPTION
}

/// A diffuse, non-emissive surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub color: Color,

    /// Fraction of bounced light lost at each reflection (0-1)
    #[serde(default = "default_absorption")]
    pub absorption: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5),
            absorption: DEFAULT_ABSORPTION,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(color: Color, absorption: f64) -> Self {
        Self { color, absorption }
    }

    /// Fraction of light that survives a bounce (1 - absorption).
    #[inline]
    pub fn retained(&self) -> f64 {
        1.0 - self.absorption
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An ordered collection of spheres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in scene: a large green ground sphere with three red
    /// unit spheres in a row in front of the camera.
    pub fn builtin() -> Self {
        let ground = Material::new(Color::new(0.0, 0.5, 0.0), DEFAULT_ABSORPTION);
        let red = Material::new(Color::new(0.5, 0.0, 0.0), DEFAULT_ABSORPTION);

        Self {
            spheres: vec![
                Sphere::new(Vec3::new(0.0, -100.0, 5.0), 100.0, ground),
                Sphere::new(Vec3::new(-2.0, 1.0, 5.0), 1.0, red),
                Sphere::new(Vec3::new(0.0, 1.0, 5.0), 1.0, red),
                Sphere::new(Vec3::new(2.0, 1.0, 5.0), 1.0, red),
            ],
        }
    }

    /// Add a sphere to the end of the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Builder-style [`Scene::add`].
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add(sphere);
        self
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scene() {
        let scene = Scene::builtin();

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.spheres[0].radius, 100.0);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, -100.0, 5.0));
        assert!(scene.spheres[1..].iter().all(|s| s.radius == 1.0));
        assert!(scene
            .spheres
            .iter()
            .all(|s| s.material.absorption == DEFAULT_ABSORPTION));
    }

    #[test]
    fn test_material_retained() {
        let material = Material::new(Color::ONE, 0.25);
        assert_eq!(material.retained(), 0.75);
        assert_eq!(Material::default().retained(), 0.5);
    }

    #[test]
    fn test_scene_builder_preserves_order() {
        let a = Sphere::new(Vec3::ZERO, 1.0, Material::default());
        let b = Sphere::new(Vec3::X, 2.0, Material::default());
        let scene = Scene::new().with_sphere(a).with_sphere(b);

        assert_eq!(scene.spheres, vec![a, b]);
        assert!(!scene.is_empty());
        assert!(Scene::new().is_empty());
    }
}
