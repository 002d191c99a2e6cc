//! JSON scene loading.
//!
//! Scene files hold the same records the renderer consumes:
//!
//! ```json
//! { "spheres": [ { "center": [0, 1, 5], "radius": 1,
//!                  "material": { "color": [0.5, 0, 0], "absorption": 0.5 } } ] }
//! ```
//!
//! The renderer trusts its input, so validation happens here, at the boundary.

use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, Sphere};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Reading scene file {}", path.display());

    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!("Loaded {} spheres from {}", scene.len(), path.display());
    Ok(scene)
}

/// Parse and validate a JSON scene from a string.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    validate(&scene)?;

    if scene.is_empty() {
        log::warn!("Scene contains no spheres, the image will be pure sky");
    }
    Ok(scene)
}

/// Check every sphere against the renderer's input contract.
pub fn validate(scene: &Scene) -> SceneResult<()> {
    for (index, sphere) in scene.spheres.iter().enumerate() {
        check_sphere(sphere).map_err(|reason| SceneError::InvalidSphere { index, reason })?;
    }
    Ok(())
}

fn check_sphere(sphere: &Sphere) -> Result<(), String> {
    if !sphere.center.is_finite() {
        return Err(format!("center {} is not finite", sphere.center));
    }
    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
        return Err(format!("radius {} must be positive and finite", sphere.radius));
    }

    let material = &sphere.material;
    if !(0.0..=1.0).contains(&material.absorption) {
        return Err(format!(
            "absorption {} is outside [0, 1]",
            material.absorption
        ));
    }
    let color = material.color.to_array();
    if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
        return Err(format!("color {} is outside [0, 1]", material.color));
    }

    Ok(())
}
