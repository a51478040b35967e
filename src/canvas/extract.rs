//! Surface extraction: signed distances back to a triangle soup

use glam::{IVec3, Vec3};

use super::chunk::CHUNK_SIZE;
use super::query::PointQuery;
use super::transvoxel::{
    corner_offset, edge_corners, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA,
};

const SAMPLES: i32 = CHUNK_SIZE + 1;
/// Density used where the field has no answer: outside
const MISS_DENSITY: f32 = 1.0;

#[inline]
fn sample_index(p: IVec3) -> usize {
    (p.x + p.y * SAMPLES + p.z * SAMPLES * SAMPLES) as usize
}

/// Triangulate the chunk-sized region starting at cell `start`, appending to `out`.
///
/// Every triangle is inflated by `surface_scale` about its centroid so that
/// triangles rasterized again keep catching rays on their shared edges.
/// Returns the number of triangles appended.
pub fn generate_triangles(
    query: &mut PointQuery<'_>,
    start: IVec3,
    surface_scale: f32,
    out: &mut Vec<Vec3>,
) -> usize {
    let mut densities = [MISS_DENSITY; (SAMPLES * SAMPLES * SAMPLES) as usize];
    for z in 0..SAMPLES {
        for y in 0..SAMPLES {
            for x in 0..SAMPLES {
                let local = IVec3::new(x, y, z);
                if let Some(distance) = query.find_closest_position((start + local).as_vec3()) {
                    densities[sample_index(local)] = distance;
                }
            }
        }
    }

    let origin = start.as_vec3();
    let mut triangles = 0;
    let mut vertices = [Vec3::ZERO; 12];

    for z in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let cell = IVec3::new(x, y, z);

                let mut case = 0usize;
                for corner in 0..8 {
                    if densities[sample_index(cell + corner_offset(corner))] > 0.0 {
                        case |= 1 << corner;
                    }
                }
                if case == 0 || case == 255 {
                    continue;
                }

                let data = &REGULAR_CELL_DATA[REGULAR_CELL_CLASS[case] as usize];
                let codes = &REGULAR_VERTEX_DATA[case];

                for (vertex, &code) in vertices.iter_mut().zip(codes).take(data.vertex_count()) {
                    let (a, b) = edge_corners(code);
                    let corner_a = cell + corner_offset(a);
                    let value_a = densities[sample_index(corner_a)];
                    let value_b = densities[sample_index(cell + corner_offset(b))];

                    let mut position = corner_a.as_vec3();
                    position[(code >> 8) as usize] += value_a / (value_a - value_b);
                    *vertex = origin + position;
                }

                for triangle in data.indices().chunks_exact(3) {
                    let [a, b, c] = [0, 1, 2].map(|i| vertices[triangle[i] as usize]);
                    let centroid = (a + b + c) / 3.0;
                    out.extend([a, b, c].map(|v| centroid + surface_scale * (v - centroid)));
                    triangles += 1;
                }
            }
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::chunk_map::ChunkMap;
    use crate::canvas::point::Point;

    /// Plane x = 3.5 facing +x, covering the whole chunk
    fn plane_map() -> ChunkMap {
        let mut map = ChunkMap::new();
        let chunk = map.find_or_add(IVec3::ZERO);
        for z in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                chunk.points.push(Point::new(IVec3::new(3, y, z), 0, 0.5, Vec3::X));
            }
        }
        map.mark_points_changed(IVec3::ZERO);
        map.jump_flood_chunks();
        map
    }

    #[test]
    fn test_plane_is_extracted_at_its_crossing() {
        let map = plane_map();
        let mut query = PointQuery::new(&map);
        let mut out = Vec::new();
        let triangles = generate_triangles(&mut query, IVec3::ZERO, 1.0, &mut out);

        assert_eq!(out.len(), triangles * 3);
        // 8 x 8 cells straddle x = 3.5, two triangles each
        assert_eq!(triangles, 128);
        for vertex in &out {
            assert!((vertex.x - 3.5).abs() < 1e-3, "vertex off the plane: {:?}", vertex);
        }

        // Windings face the positive side
        for triangle in out.chunks_exact(3) {
            let normal = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);
            assert!(normal.x > 0.0);
        }
    }

    #[test]
    fn test_surface_scale_inflates_about_centroid() {
        let map = plane_map();
        let mut plain = Vec::new();
        let mut scaled = Vec::new();
        generate_triangles(&mut PointQuery::new(&map), IVec3::ZERO, 1.0, &mut plain);
        generate_triangles(&mut PointQuery::new(&map), IVec3::ZERO, 1.01, &mut scaled);

        for (a, b) in plain.chunks_exact(3).zip(scaled.chunks_exact(3)) {
            let centroid_a = (a[0] + a[1] + a[2]) / 3.0;
            let centroid_b = (b[0] + b[1] + b[2]) / 3.0;
            assert!((centroid_a - centroid_b).length() < 1e-4);
            let edge_a = (a[1] - a[0]).length();
            let edge_b = (b[1] - b[0]).length();
            assert!((edge_b / edge_a - 1.01).abs() < 1e-3);
        }
    }

    #[test]
    fn test_empty_region_emits_nothing() {
        let map = ChunkMap::new();
        let mut out = Vec::new();
        assert_eq!(generate_triangles(&mut PointQuery::new(&map), IVec3::ZERO, 1.01, &mut out), 0);
        assert!(out.is_empty());
    }
}
