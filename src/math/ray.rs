//! Ray type and ray/triangle intersection

use crate::core::types::Vec3;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray (direction need not be normalized; times are in direction units)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Two-sided Möller–Trumbore intersection.
    ///
    /// Returns the hit time `t >= 0`. Hits exactly on a triangle edge count,
    /// so a ray through a shared edge may report both triangles.
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < 1e-8 {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        (t >= 0.0).then_some(t)
    }
}

/// Geometric normal `normalize((b - a) x (c - a))`, zero for degenerate triangles
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -2.0), Vec3::Z);
        let t = ray.intersect_triangle(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert!((t.unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_hit_back_face() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -2.0), Vec3::Z);
        let t = ray.intersect_triangle(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        );
        assert!(t.is_some());
    }

    #[test]
    fn test_triangle_behind_origin() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, 2.0), Vec3::Z);
        let t = ray.intersect_triangle(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_triangle_miss_and_parallel() {
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(1.0, 0.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);
        assert!(Ray::new(Vec3::new(0.9, 0.9, 0.0), Vec3::Z).intersect_triangle(a, b, c).is_none());
        assert!(Ray::new(Vec3::new(0.0, 0.2, 1.0), Vec3::X).intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn test_triangle_normal() {
        let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(n, Vec3::Z);
        assert_eq!(triangle_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0), Vec3::ZERO);
    }
}
