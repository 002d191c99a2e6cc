//! Orb Core - scene model for the Orb path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`
//! - **Scene files**: JSON loading with validation
//!
//! # Example
//!
//! ```ignore
//! use orb_core::{load_scene, Scene};
//!
//! let scene = load_scene("spheres.json")?;
//! println!("Loaded {} spheres", scene.len());
//!
//! // Or the built-in four-sphere scene
//! let scene = Scene::builtin();
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, validate, SceneError, SceneResult};
pub use scene::{Material, Scene, Sphere};
