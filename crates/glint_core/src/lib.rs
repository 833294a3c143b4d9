//! Scene model and scene-description loading for glint.
//!
//! Defines the immutable scene a render consumes (spheres, lights,
//! background) plus the render settings, and loads both from JSON
//! scene-description files. Scenes are validated at construction time;
//! the renderer never has to handle a malformed sphere or light.

mod config;
mod scene;

pub use config::{CameraDesc, ConfigError, ConfigResult, SceneFile};
pub use scene::{Light, RenderSettings, Scene, SceneError, Sphere};
