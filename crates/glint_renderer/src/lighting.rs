//! Phong-style local lighting with hard shadows.

use glint_core::{Light, Scene};
use glint_math::{reflect, Interval, Ray, Vec3};

use crate::intersect::closest_intersection;
use crate::EPSILON;

/// Compute the scalar light intensity at a surface point.
///
/// Sums the contribution of every light in the scene:
/// - Ambient lights contribute their intensity unconditionally.
/// - Point and directional lights are shadow-tested first: any sphere
///   between the point and the light suppresses that light entirely
///   (hard shadow, no penumbra).
/// - Diffuse and (when `specular` is `Some`) Phong specular terms use the
///   unnormalized light direction; magnitudes divide out in the cosines.
///
/// For point lights the light direction is `position - point` and the
/// shadow ray is bounded at `t_max = 1`: the light itself sits at
/// parameter 1, so geometry behind it does not cast a shadow. Directional
/// lights are tested out to infinity.
///
/// The result is a single non-negative scalar; the caller applies it
/// uniformly to the sphere's base color.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let mut total = 0.0;

    for light in &scene.lights {
        let (intensity, light_dir, t_max) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            Light::Point {
                intensity,
                position,
            } => (intensity, position - point, 1.0),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction, f32::INFINITY),
        };

        // Shadow check
        let shadow_ray = Ray::new(point, light_dir);
        if closest_intersection(scene, &shadow_ray, Interval::new(EPSILON, t_max)).is_some() {
            continue;
        }

        // Diffuse
        let n_dot_l = normal.dot(light_dir);
        if n_dot_l > 0.0 {
            total += intensity * n_dot_l / (normal.length() * light_dir.length());
        }

        // Specular
        if let Some(exponent) = specular {
            let reflection = reflect(light_dir, normal);
            let r_dot_v = reflection.dot(view);
            if r_dot_v > 0.0 {
                total += intensity * (r_dot_v / (reflection.length() * view.length())).powf(exponent);
            }
        }
    }

    total
}
