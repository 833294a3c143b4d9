//! Glint renderer - CPU recursive ray tracing
//!
//! A Whitted-style ray tracer over sphere scenes: closed-form ray/sphere
//! intersection, Phong-style local lighting with hard shadows, and
//! depth-bounded recursive specular reflection. Every pixel is a pure
//! function of the immutable scene and camera, so the frame driver renders
//! scanlines in parallel.

mod camera;
mod intersect;
mod lighting;
mod renderer;
mod tracer;

pub use camera::{canvas_to_viewport, Camera};
pub use intersect::{closest_intersection, intersect_ray_sphere, Hit};
pub use lighting::compute_lighting;
pub use renderer::{color_to_rgb, render, render_pixel, Color, ImageBuffer};
pub use tracer::trace_ray;

/// Start-parameter bias for shadow and reflection rays, so a surface
/// point does not intersect its own sphere due to floating-point error.
pub const EPSILON: f32 = 1e-3;

/// Re-export math and scene types used in this crate's API
pub use glint_core::{Light, RenderSettings, Scene, Sphere};
pub use glint_math::{reflect, Interval, Mat3, Ray, Vec3};
