//! Nearest-point and signed-distance queries against a flooded chunk map

use glam::{IVec3, Vec3};

use super::chunk::{cell_index, chunk_key_of, slot_offset, Chunk, CHUNK_SIZE};
use super::chunk_map::ChunkMap;

/// Nearest surface point resolved for a query position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPoint {
    /// Exact point position in cell coordinates
    pub position: Vec3,
    /// Decoded surface normal
    pub normal: Vec3,
    /// Unsigned distance from the query position
    pub distance: f32,
}

impl ClosestPoint {
    /// Distance signed by the point's normal: negative behind the surface
    pub fn signed_distance(&self, query: Vec3) -> f32 {
        if self.normal.dot(query - self.position) < 0.0 {
            -self.distance
        } else {
            self.distance
        }
    }
}

/// Query cursor over a chunk map.
///
/// Remembers the last chunk it looked up, so spatially coherent queries skip
/// most map lookups. Owned by the caller, one per thread.
pub struct PointQuery<'a> {
    map: &'a ChunkMap,
    last_key: Option<IVec3>,
    last_chunk: Option<&'a Chunk>,
}

impl<'a> PointQuery<'a> {
    pub fn new(map: &'a ChunkMap) -> Self {
        Self {
            map,
            last_key: None,
            last_chunk: None,
        }
    }

    fn chunk(&mut self, key: IVec3) -> Option<&'a Chunk> {
        if self.last_key != Some(key) {
            self.last_chunk = self.map.get(key);
            self.last_key = Some(key);
        }
        self.last_chunk
    }

    /// Nearest point to `position`, read from the cell `position` rounds to.
    ///
    /// Fails when the chunk is missing, not fully flooded, or the cell has no point.
    pub fn closest_point(&mut self, position: Vec3) -> Option<ClosestPoint> {
        let cell = (position + 0.5).floor().as_ivec3();
        let key = chunk_key_of(cell);

        let chunk = self.chunk(key)?;
        let grid = chunk.ready_grid()?;
        let index = grid[cell_index(cell - key * CHUNK_SIZE)];
        if !index.is_valid() {
            return None;
        }

        let owner = self.map.get(key + slot_offset(index.slot()))?;
        let point = owner.points().get(index.point())?;
        let point_position = owner.origin().as_vec3() + point.position();

        Some(ClosestPoint {
            position: point_position,
            normal: point.normal(),
            distance: position.distance(point_position),
        })
    }

    /// Signed distance to the nearest point
    pub fn find_closest_position(&mut self, position: Vec3) -> Option<f32> {
        self.closest_point(position)
            .map(|closest| closest.signed_distance(position))
    }

    /// Trilinear blend of the signed distances at the 8 surrounding lattice
    /// positions. Any miss fails the whole sample.
    pub fn interpolated_distance(&mut self, position: Vec3) -> Option<f32> {
        let min = position.floor();
        let alpha = position - min;

        let mut corners = [0.0f32; 8];
        for (corner, distance) in corners.iter_mut().enumerate() {
            let offset = Vec3::new(
                (corner & 1) as f32,
                ((corner >> 1) & 1) as f32,
                ((corner >> 2) & 1) as f32,
            );
            *distance = self.find_closest_position(min + offset)?;
        }

        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
        let x00 = lerp(corners[0], corners[1], alpha.x);
        let x10 = lerp(corners[2], corners[3], alpha.x);
        let x01 = lerp(corners[4], corners[5], alpha.x);
        let x11 = lerp(corners[6], corners[7], alpha.x);
        let y0 = lerp(x00, x10, alpha.y);
        let y1 = lerp(x01, x11, alpha.y);
        Some(lerp(y0, y1, alpha.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::point::Point;

    /// One point on a +x facing plane at x = 3.5, y = z = 4
    fn single_point_map() -> ChunkMap {
        let mut map = ChunkMap::new();
        map.find_or_add(IVec3::ZERO)
            .points
            .push(Point::new(IVec3::new(3, 4, 4), 0, 0.5, Vec3::X));
        map.mark_points_changed(IVec3::ZERO);
        map.jump_flood_chunks();
        map
    }

    #[test]
    fn test_closest_point_and_sign() {
        let map = single_point_map();
        let mut query = PointQuery::new(&map);

        let point = Vec3::new(3.5, 4.0, 4.0);
        let front = query.find_closest_position(Vec3::new(6.0, 4.0, 4.0)).unwrap();
        assert!((front - 2.5).abs() < 1e-4);

        let back = query.find_closest_position(Vec3::new(1.0, 4.0, 4.0)).unwrap();
        assert!((back + 2.5).abs() < 1e-4);

        let closest = query.closest_point(Vec3::new(3.5, 7.0, 4.0)).unwrap();
        assert!((closest.position - point).length() < 1e-4);
        assert!((closest.distance - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_query_reaches_into_border_chunks() {
        let map = single_point_map();
        let mut query = PointQuery::new(&map);
        // Border chunk at -x resolves the point through its +x face slot
        let distance = query.find_closest_position(Vec3::new(-2.0, 4.0, 4.0)).unwrap();
        assert!((distance + 5.5).abs() < 1e-4);
    }

    #[test]
    fn test_missing_chunk_fails() {
        let map = single_point_map();
        let mut query = PointQuery::new(&map);
        assert!(query.find_closest_position(Vec3::splat(100.0)).is_none());
        assert!(query.interpolated_distance(Vec3::splat(100.0)).is_none());
    }

    #[test]
    fn test_unflooded_chunk_fails() {
        let mut map = ChunkMap::new();
        map.find_or_add(IVec3::ZERO)
            .points
            .push(Point::new(IVec3::splat(4), 0, 0.0, Vec3::X));
        let mut query = PointQuery::new(&map);
        assert!(query.find_closest_position(Vec3::splat(4.0)).is_none());
    }

    #[test]
    fn test_interpolated_distance_on_lattice_matches_nearest() {
        let map = single_point_map();
        let mut query = PointQuery::new(&map);
        let at = Vec3::new(6.0, 4.0, 4.0);
        let nearest = query.find_closest_position(at).unwrap();
        let interpolated = query.interpolated_distance(at).unwrap();
        assert!((nearest - interpolated).abs() < 1e-5);

        // Halfway along x on the plane's axis: the blend of 2.5 and 3.5
        let blended = query.interpolated_distance(Vec3::new(6.5, 4.0, 4.0)).unwrap();
        assert!((blended - 3.0).abs() < 1e-4);
    }
}
