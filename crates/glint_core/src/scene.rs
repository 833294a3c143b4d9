//! Scene types for the ray tracer.
//!
//! Plain immutable value structs: a `Scene` is built (or loaded) once,
//! validated, and then only read for the duration of a render. List order
//! of spheres and lights is significant: the intersection engine breaks
//! exact `t` ties in favor of the sphere that appears first.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found when validating a scene or its render settings.
///
/// These are configuration errors: they are reported before any pixel is
/// traced, never discovered mid-render.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("sphere {index}: radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index}: reflectivity must be in [0, 1], got {value}")]
    InvalidReflectivity { index: usize, value: f32 },

    #[error("sphere {index}: specular exponent must be positive, got {value}")]
    InvalidSpecular { index: usize, value: f32 },

    #[error("light {index}: intensity must be non-negative, got {value}")]
    InvalidIntensity { index: usize, value: f32 },

    #[error("canvas must be at least 1x1, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("viewport size must be positive, got {value}")]
    InvalidViewportSize { value: f32 },

    #[error("projection plane distance must be positive, got {value}")]
    InvalidProjectionPlane { value: f32 },
}

/// A sphere in the scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,

    /// Radius, must be positive
    pub radius: f32,

    /// Base color, RGB on a 0-255 scale (not required to be pre-clamped)
    pub color: Vec3,

    /// Phong shininess exponent; `None` means no specular highlight
    #[serde(default)]
    pub specular: Option<f32>,

    /// Fraction of the color contributed by mirror reflection,
    /// 0 = fully matte, 1 = perfect mirror
    #[serde(default)]
    pub reflective: f32,
}

/// A light source.
///
/// Each kind carries only the fields that are meaningful for it, so an
/// ambient light has no unused position field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Light {
    /// Uniform light that reaches every surface point unconditionally.
    Ambient { intensity: f32 },

    /// Light radiating from a world-space position.
    Point { intensity: f32, position: Vec3 },

    /// Light arriving from a fixed direction, infinitely far away.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    /// The light's scalar intensity, whatever its kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity } => intensity,
            Light::Point { intensity, .. } => intensity,
            Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// An immutable scene: ordered sphere and light lists plus the color
/// returned for rays that hit nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,

    /// Background color, RGB on a 0-255 scale
    #[serde(default)]
    pub background: Vec3,
}

impl Scene {
    /// Create a scene from sphere and light lists.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, background: Vec3) -> Self {
        Self {
            spheres,
            lights,
            background,
        }
    }

    /// Check every sphere and light against the model invariants.
    ///
    /// The comparisons are written so that NaN values are rejected too.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !(0.0..=1.0).contains(&sphere.reflective) {
                return Err(SceneError::InvalidReflectivity {
                    index,
                    value: sphere.reflective,
                });
            }
            if let Some(exponent) = sphere.specular {
                if !(exponent > 0.0) {
                    return Err(SceneError::InvalidSpecular {
                        index,
                        value: exponent,
                    });
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            let intensity = light.intensity();
            if !(intensity >= 0.0) {
                return Err(SceneError::InvalidIntensity {
                    index,
                    value: intensity,
                });
            }
        }

        Ok(())
    }
}

/// Fixed per-render settings: output size, viewport geometry, and the
/// reflection recursion budget.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output width in pixels
    pub canvas_width: u32,

    /// Output height in pixels
    pub canvas_height: u32,

    /// Side length of the viewport rectangle in camera space
    pub viewport_size: f32,

    /// Depth of the viewport plane from the camera
    pub projection_plane_z: f32,

    /// Maximum reflection recursion depth; 0 disables reflections
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_max_depth() -> u32 {
    3
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 600,
            viewport_size: 1.0,
            projection_plane_z: 1.0,
            max_depth: 3,
        }
    }
}

impl RenderSettings {
    /// Check the settings against the model invariants.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SceneError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.viewport_size > 0.0) {
            return Err(SceneError::InvalidViewportSize {
                value: self.viewport_size,
            });
        }
        if !(self.projection_plane_z > 0.0) {
            return Err(SceneError::InvalidProjectionPlane {
                value: self.projection_plane_z,
            });
        }
        Ok(())
    }
}
