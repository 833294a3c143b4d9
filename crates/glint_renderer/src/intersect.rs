//! Ray/sphere intersection and nearest-hit search.

use glint_core::{Scene, Sphere};
use glint_math::{Interval, Ray};

/// Result of a nearest-hit query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the hit sphere in the scene's sphere list
    pub sphere: usize,
    /// Ray parameter of the hit
    pub t: f32,
}

/// Solve `|origin + t*direction - center|^2 = radius^2` for t.
///
/// Returns both quadratic roots, `+sqrt` root first. A ray that misses the
/// sphere yields `[INFINITY, INFINITY]`, which no hit range surrounds;
/// a miss is an expected outcome, not an error.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> [f32; 2] {
    let oc = ray.origin - sphere.center;

    let k1 = ray.direction.dot(ray.direction);
    let k2 = 2.0 * oc.dot(ray.direction);
    let k3 = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = k2 * k2 - 4.0 * k1 * k3;
    if discriminant < 0.0 {
        return [f32::INFINITY, f32::INFINITY];
    }

    let sqrtd = discriminant.sqrt();
    [(-k2 + sqrtd) / (2.0 * k1), (-k2 - sqrtd) / (2.0 * k1)]
}

/// Find the sphere with the smallest hit parameter strictly inside `range`.
///
/// Spheres are scanned in list order, both roots each, against a running
/// minimum with strict `<`. When two roots are exactly equal the sphere
/// appearing first in the list wins; tangent geometry renders differently
/// under any other rule, so the scan order must stay as is.
pub fn closest_intersection(scene: &Scene, ray: &Ray, range: Interval) -> Option<Hit> {
    let mut closest_t = f32::INFINITY;
    let mut closest_sphere = None;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let [t1, t2] = intersect_ray_sphere(ray, sphere);
        if range.surrounds(t1) && t1 < closest_t {
            closest_t = t1;
            closest_sphere = Some(index);
        }
        if range.surrounds(t2) && t2 < closest_t {
            closest_t = t2;
            closest_sphere = Some(index);
        }
    }

    closest_sphere.map(|sphere| Hit {
        sphere,
        t: closest_t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere {
            center,
            radius,
            color: Vec3::new(255.0, 255.0, 255.0),
            specular: None,
            reflective: 0.0,
        }
    }

    #[test]
    fn test_roots_are_entry_and_exit_distances() {
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Exit root (+sqrt) comes first, entry root second
        let [t1, t2] = intersect_ray_sphere(&ray, &s);
        assert!((t1 - 6.0).abs() < 1e-5);
        assert!((t2 - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss_returns_infinite_roots() {
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let [t1, t2] = intersect_ray_sphere(&ray, &s);
        assert_eq!(t1, f32::INFINITY);
        assert_eq!(t2, f32::INFINITY);
    }

    #[test]
    fn test_tangent_ray_has_equal_roots() {
        // Ray grazing the sphere at (0, 1, 5)
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z);

        let [t1, t2] = intersect_ray_sphere(&ray, &s);
        assert_eq!(t1, t2);
        assert!((t1 - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));

        let [t1, t2] = intersect_ray_sphere(&ray, &s);
        assert!((t1 - 3.0).abs() < 1e-5);
        assert!((t2 - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_picks_smallest_root_in_range() {
        let scene = Scene::new(
            vec![
                sphere(Vec3::new(0.0, 0.0, 8.0), 1.0),
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0),
            ],
            vec![],
            Vec3::ZERO,
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&scene, &ray, Interval::new(1.0, f32::INFINITY)).unwrap();
        assert_eq!(hit.sphere, 1);
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_ties_go_to_earlier_sphere() {
        // Identical spheres produce identical roots; strict < keeps the
        // first one scanned.
        let scene = Scene::new(
            vec![
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0),
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0),
            ],
            vec![],
            Vec3::ZERO,
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = closest_intersection(&scene, &ray, Interval::new(1.0, f32::INFINITY)).unwrap();
        assert_eq!(hit.sphere, 0);
    }

    #[test]
    fn test_range_bounds_are_exclusive() {
        let scene = Scene::new(vec![sphere(Vec3::new(0.0, 0.0, 5.0), 1.0)], vec![], Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Both roots (4 and 6) above t_max
        assert!(closest_intersection(&scene, &ray, Interval::new(1.0, 4.0)).is_none());

        // Entry root excluded by t_min, exit root still counts
        let hit = closest_intersection(&scene, &ray, Interval::new(4.0, f32::INFINITY)).unwrap();
        assert!((hit.t - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_spheres_is_a_miss() {
        let scene = Scene::new(vec![], vec![], Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(closest_intersection(&scene, &ray, Interval::UNIVERSE).is_none());
    }
}
