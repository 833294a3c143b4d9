//! Recursive ray tracing with a bounded reflection depth.

use glint_core::Scene;
use glint_math::{reflect, Interval, Ray, Vec3};

use crate::intersect::closest_intersection;
use crate::lighting::compute_lighting;
use crate::EPSILON;

/// Trace a ray into the scene and return its color (0-255 scale, unclamped).
///
/// Finds the nearest hit inside `range`, shades it with the local lighting
/// model, and, while `depth` and the sphere's reflectivity allow, blends
/// in the color of the recursively traced mirror ray:
///
/// `(1 - reflectivity) * local + reflectivity * reflected`
///
/// A ray that hits nothing returns the scene's background color. `depth`
/// strictly decreases on every recursive call and is checked before each
/// recursion, so the call chain is bounded even for mutually reflective
/// spheres.
pub fn trace_ray(scene: &Scene, ray: &Ray, range: Interval, depth: u32) -> Vec3 {
    let hit = match closest_intersection(scene, ray, range) {
        Some(hit) => hit,
        None => return scene.background,
    };
    let sphere = &scene.spheres[hit.sphere];

    let point = ray.at(hit.t);
    let offset = point - sphere.center;
    debug_assert!(
        offset.length_squared() > 0.0,
        "hit point coincides with sphere center"
    );
    let normal = offset.normalize();

    let view = -ray.direction;
    let local_color = compute_lighting(scene, point, normal, view, sphere.specular) * sphere.color;

    // Recursion ends on the depth budget or a fully matte surface.
    let reflectivity = sphere.reflective;
    if depth == 0 || reflectivity <= 0.0 {
        return local_color;
    }

    let reflected_ray = Ray::new(point, reflect(view, normal));
    let reflected_color = trace_ray(
        scene,
        &reflected_ray,
        Interval::new(EPSILON, f32::INFINITY),
        depth - 1,
    );

    (1.0 - reflectivity) * local_color + reflectivity * reflected_color
}
