//! JSON scene-description loading.
//!
//! A scene file carries everything one render consumes: canvas and
//! viewport settings, the camera placement, the sphere and light lists,
//! and the background color. `SceneFile::into_parts` is the validation
//! gate: callers get either a fully checked scene or a `ConfigError`
//! before any pixel is traced.

use std::fs;
use std::path::Path;

use glint_math::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Light, RenderSettings, Scene, SceneError, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for scene-description loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Camera placement as described in a scene file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Camera position in world space
    #[serde(default)]
    pub position: Vec3,

    /// Rotation matrix, row-major; identity when omitted.
    ///
    /// Expected to be orthonormal; it is applied to ray directions as-is.
    #[serde(default = "identity_rows")]
    pub orientation: [[f32; 3]; 3],
}

fn identity_rows() -> [[f32; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: identity_rows(),
        }
    }
}

impl CameraDesc {
    /// The orientation as a `Mat3`.
    ///
    /// `from_cols_array_2d` reads the inner arrays as columns, so the
    /// row-major file layout needs a transpose.
    pub fn orientation_matrix(&self) -> Mat3 {
        Mat3::from_cols_array_2d(&self.orientation).transpose()
    }
}

/// A complete scene description as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneFile {
    pub settings: RenderSettings,

    #[serde(default)]
    pub camera: CameraDesc,

    /// Background color, RGB on a 0-255 scale
    #[serde(default)]
    pub background: Vec3,

    pub spheres: Vec<Sphere>,

    pub lights: Vec<Light>,
}

impl SceneFile {
    /// Parse a scene description from a JSON string.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene description from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Split into a validated scene, render settings, and camera.
    ///
    /// Fails with the first invariant violation found; nothing is rendered
    /// from a scene that does not pass.
    pub fn into_parts(self) -> ConfigResult<(Scene, RenderSettings, CameraDesc)> {
        let scene = Scene::new(self.spheres, self.lights, self.background);
        scene.validate()?;
        self.settings.validate()?;
        log::info!(
            "Scene loaded: {} spheres, {} lights, {}x{} canvas",
            scene.spheres.len(),
            scene.lights.len(),
            self.settings.canvas_width,
            self.settings.canvas_height
        );
        Ok((scene, self.settings, self.camera))
    }
}
