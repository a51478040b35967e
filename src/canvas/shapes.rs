//! Triangle soups for the demo binary, benches and tests.
//!
//! Every builder winds triangles counter-clockwise seen from outside, so
//! `(b - a) x (c - a)` points out of the solid.

use std::f32::consts::PI;

use glam::Vec3;

/// Axis-aligned box from `min` to `max`, 12 triangles
pub fn cube(min: Vec3, max: Vec3) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(36);
    for k in 0..3 {
        let u = (k + 1) % 3;
        let v = (k + 2) % 3;
        for positive in [false, true] {
            let corner = |cu: bool, cv: bool| {
                let mut p = Vec3::ZERO;
                p[k] = if positive { max[k] } else { min[k] };
                p[u] = if cu { max[u] } else { min[u] };
                p[v] = if cv { max[v] } else { min[v] };
                p
            };
            let (a, b, c, d) = (
                corner(false, false),
                corner(true, false),
                corner(true, true),
                corner(false, true),
            );
            // e_u x e_v = e_k: (a, b, c) faces +k
            if positive {
                vertices.extend([a, b, c, a, c, d]);
            } else {
                vertices.extend([a, c, b, a, d, c]);
            }
        }
    }
    vertices
}

/// UV sphere with `rings` latitude bands and `segments` longitude slices
pub fn sphere(center: Vec3, radius: f32, rings: u32, segments: u32) -> Vec<Vec3> {
    let rings = rings.max(2);
    let segments = segments.max(3);

    let vertex = |ring: u32, segment: u32| {
        let theta = PI * ring as f32 / rings as f32;
        let phi = 2.0 * PI * segment as f32 / segments as f32;
        center
            + radius
                * Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin())
    };

    let mut vertices = Vec::with_capacity((rings * segments * 6) as usize);
    let mut push = |a: Vec3, b: Vec3, c: Vec3| {
        let normal = (b - a).cross(c - a);
        if normal.length_squared() <= f32::EPSILON {
            // Collapsed at a pole
            return;
        }
        if normal.dot((a + b + c) / 3.0 - center) >= 0.0 {
            vertices.extend([a, b, c]);
        } else {
            vertices.extend([a, c, b]);
        }
    };

    for ring in 0..rings {
        for segment in 0..segments {
            let a = vertex(ring, segment);
            let b = vertex(ring, segment + 1);
            let c = vertex(ring + 1, segment + 1);
            let d = vertex(ring + 1, segment);
            push(a, b, c);
            push(a, c, d);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(vertices: &[Vec3], inside: Vec3) {
        assert_eq!(vertices.len() % 3, 0);
        for triangle in vertices.chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]];
            let normal = (b - a).cross(c - a);
            assert!(normal.dot((a + b + c) / 3.0 - inside) > 0.0);
        }
    }

    #[test]
    fn test_cube_winding() {
        let vertices = cube(Vec3::ZERO, Vec3::splat(10.0));
        assert_eq!(vertices.len(), 36);
        assert_outward(&vertices, Vec3::splat(5.0));
    }

    #[test]
    fn test_sphere_winding() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let vertices = sphere(center, 6.0, 12, 24);
        assert!(!vertices.is_empty());
        assert_outward(&vertices, center);
        for v in &vertices {
            assert!((v.distance(center) - 6.0).abs() < 1e-3);
        }
    }
}
