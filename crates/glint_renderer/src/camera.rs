//! Camera and primary-ray generation.

use glint_core::RenderSettings;
use glint_math::{Mat3, Ray, Vec3};

/// Camera for generating primary rays.
///
/// The orientation is an orthonormal rotation matrix. It rotates ray
/// directions only; the position offsets the ray origin and is never
/// applied to directions.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Mat3,
}

impl Camera {
    /// Create a camera from a position and rotation matrix.
    pub fn new(position: Vec3, orientation: Mat3) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a camera rotated `yaw` degrees about the world Y axis.
    pub fn from_yaw_degrees(position: Vec3, yaw: f32) -> Self {
        Self::new(position, Mat3::from_rotation_y(yaw.to_radians()))
    }

    /// Primary ray through centered canvas coordinates `(x, y)`, y-up.
    pub fn primary_ray(&self, x: f32, y: f32, settings: &RenderSettings) -> Ray {
        let direction = self.orientation * canvas_to_viewport(x, y, settings);
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Mat3::IDENTITY)
    }
}

/// Map centered canvas coordinates to a point on the viewport plane.
///
/// Both axes divide by the canvas width; a non-square canvas stretches
/// vertically rather than changing the field of view. The z component is
/// the projection plane distance, which makes the result directly usable
/// as a ray direction from the camera.
pub fn canvas_to_viewport(x: f32, y: f32, settings: &RenderSettings) -> Vec3 {
    Vec3::new(
        x * settings.viewport_size / settings.canvas_width as f32,
        y * settings.viewport_size / settings.canvas_width as f32,
        settings.projection_plane_z,
    )
}
