//! Triangle rasterization into edge-crossing points.
//!
//! Each triangle is ray cast along the three principal axes. For axis K the
//! rays start on the integer lattice of the two other axes, at the minimum K
//! of the triangle, and every hit becomes one point on a K-aligned voxel edge.

use glam::{IVec3, Vec3};

use super::chunk::MAX_COORDINATE;
use crate::math::{triangle_normal, Aabb, IntBox, Ray};

/// One rasterized crossing, in absolute cell coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub cell: IVec3,
    pub axis: usize,
    pub alpha: f32,
    pub normal: Vec3,
}

/// Rasterize one triangle, calling `emit` per crossing.
///
/// Returns false, emitting nothing, if the triangle covers more than
/// `max_cells` cells or a vertex is not finite or lies beyond
/// [`MAX_COORDINATE`].
pub fn rasterize_triangle(
    a: Vec3,
    b: Vec3,
    c: Vec3,
    max_cells: u64,
    mut emit: impl FnMut(Crossing),
) -> bool {
    let addressable = |v: Vec3| v.is_finite() && v.abs().max_element() <= MAX_COORDINATE;
    if !(addressable(a) && addressable(b) && addressable(c)) {
        return false;
    }

    let bounds = Aabb::from_triangle(a, b, c);
    let cells = IntBox::from_aabb(&bounds);
    if cells.count() > max_cells {
        return false;
    }

    let normal = triangle_normal(a, b, c);

    for k in 0..3 {
        let i = (k + 2) % 3;
        let j = (k + 1) % 3;
        let min_k = bounds.min[k];

        let mut direction = Vec3::ZERO;
        direction[k] = 1.0;

        for ray_i in cells.min[i]..cells.max[i] {
            for ray_j in cells.min[j]..cells.max[j] {
                let mut origin = Vec3::ZERO;
                origin[i] = ray_i as f32;
                origin[j] = ray_j as f32;
                origin[k] = min_k;

                let Some(time) = Ray::new(origin, direction).intersect_triangle(a, b, c) else {
                    continue;
                };

                let exact_k = min_k + time;
                let cell_k = exact_k.floor();

                let mut cell = IVec3::ZERO;
                cell[i] = ray_i;
                cell[j] = ray_j;
                cell[k] = cell_k as i32;

                emit(Crossing {
                    cell,
                    axis: k,
                    alpha: exact_k - cell_k,
                    normal,
                });
            }
        }
    }

    true
}
