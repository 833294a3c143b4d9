// Glint math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

// Re-export the vector types the rest of the workspace uses
pub use glam::{Mat3, Vec3};

/// Reflect `v` about `normal`.
///
/// Returns `2 * dot(normal, v) * normal - v`. Neither input needs to be
/// unit length; the result has the same length as `v` when `normal` is
/// a unit vector.
#[inline]
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    2.0 * normal.dot(v) * normal - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_reflect_about_axis() {
        // 2 * dot(Y, v) * Y - v with v = (1, -1, 0) gives (-1, -1, 0)
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn test_reflect_involution() {
        // reflect(reflect(v, n), n) == v for a unit normal
        let v = Vec3::new(0.3, -1.7, 2.4);
        let n = Vec3::new(1.0, 2.0, -2.0).normalize();
        let rr = reflect(reflect(v, n), n);
        assert!((rr - v).length() < 1e-5);
    }

    #[test]
    fn test_reflect_preserves_normal_component() {
        // A vector along the normal reflects onto itself
        let n = Vec3::Z;
        assert_eq!(reflect(Vec3::new(0.0, 0.0, 3.0), n), Vec3::new(0.0, 0.0, 3.0));
    }
}
