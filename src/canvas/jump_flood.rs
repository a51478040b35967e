//! Jump flood over one chunk's 8^3 grid.
//!
//! Seeds come from the points of the chunk and of its neighbors up to the
//! requested ring, translated into the chunk's local frame. Passes with steps
//! 4, 2 and 1 then propagate the nearest seed to every cell.

use glam::{IVec3, Vec3};

use super::chunk::{
    cell_index, slot_offset, Chunk, ChunkState, Indices, CHUNK_CELLS, CHUNK_SIZE,
    NEIGHBOR_SLOTS, SELF_SLOT,
};
use super::point::PointIndex;

const STEPS: [i32; 3] = [4, 2, 1];

/// The 3x3x3 block of chunks around one chunk, resolved from the chunk map.
pub struct Neighborhood<'a> {
    pub key: IVec3,
    pub chunks: [Option<&'a Chunk>; NEIGHBOR_SLOTS],
}

impl<'a> Neighborhood<'a> {
    pub fn center(&self) -> Option<&'a Chunk> {
        self.chunks[SELF_SLOT]
    }

    /// Cheap check: did the ring entered at `state` bring any point?
    pub fn ring_has_points(&self, state: ChunkState) -> bool {
        state
            .ring_slots()
            .iter()
            .any(|&slot| self.chunks[slot].is_some_and(Chunk::has_points))
    }
}

/// Neighborhood points translated into the center chunk's local frame
pub struct NeighborhoodPoints {
    slots: [Vec<Vec3>; NEIGHBOR_SLOTS],
}

impl NeighborhoodPoints {
    /// Translate every point within `state`'s radius
    pub fn gather(hood: &Neighborhood<'_>, state: ChunkState) -> Self {
        let mut slots: [Vec<Vec3>; NEIGHBOR_SLOTS] = Default::default();
        for ring in ChunkState::FLOODED.into_iter().filter(|&ring| ring <= state) {
            for &slot in ring.ring_slots() {
                let Some(chunk) = hood.chunks[slot] else { continue };
                let offset = ((chunk.key() - hood.key) * CHUNK_SIZE).as_vec3();
                slots[slot] = chunk.points().iter().map(|p| offset + p.position()).collect();
            }
        }
        Self { slots }
    }

    #[inline]
    pub fn get(&self, index: PointIndex) -> Vec3 {
        self.slots[index.slot()][index.point()]
    }

    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full flood for `state`: seed, then passes 4, 2, 1.
pub fn flood(hood: &Neighborhood<'_>, state: ChunkState) -> Indices {
    let points = NeighborhoodPoints::gather(hood, state);
    let mut indices = seed(hood, &points, state);

    let mut scratch = [PointIndex::INVALID; CHUNK_CELLS];
    for (pass, &step) in STEPS.iter().enumerate() {
        if pass % 2 == 0 {
            jump_flood_pass(step, &points, &indices, &mut scratch);
        } else {
            jump_flood_pass(step, &points, &scratch, &mut indices);
        }
    }
    // Odd pass count: the last result sits in scratch
    scratch
}

/// Seed each point into the two cells around it along its axis, clamped to the grid.
///
/// Rings are visited in advance order so ties keep the same winner between runs.
pub fn seed(hood: &Neighborhood<'_>, points: &NeighborhoodPoints, state: ChunkState) -> Indices {
    let mut indices = [PointIndex::INVALID; CHUNK_CELLS];

    for ring in ChunkState::FLOODED.into_iter().filter(|&ring| ring <= state) {
        for &slot in ring.ring_slots() {
            let Some(chunk) = hood.chunks[slot] else { continue };
            let offset = slot_offset(slot) * CHUNK_SIZE;
            debug_assert_eq!(chunk.key() - hood.key, slot_offset(slot));

            for (point_slot, point) in chunk.points().iter().enumerate() {
                let index = PointIndex::new(slot, point_slot);
                let position = points.get(index);

                let base = offset + point.cell();
                let mut above = base;
                above[point.axis()] += 1;

                for cell in [base, above] {
                    let cell = cell.clamp(IVec3::ZERO, IVec3::splat(CHUNK_SIZE - 1));
                    let target = &mut indices[cell_index(cell)];
                    let cell_position = cell.as_vec3();
                    if !target.is_valid()
                        || position.distance_squared(cell_position)
                            < points.get(*target).distance_squared(cell_position)
                    {
                        *target = index;
                    }
                }
            }
        }
    }

    indices
}

/// One pass: every cell keeps the closest point referenced by the up to 27
/// cells at offsets {-step, 0, +step}^3. Equal distances keep the first found.
pub fn jump_flood_pass(
    step: i32,
    points: &NeighborhoodPoints,
    input: &Indices,
    output: &mut Indices,
) {
    for z in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let cell = IVec3::new(x, y, z);
                let position = cell.as_vec3();

                let mut best = PointIndex::INVALID;
                let mut best_distance = f32::MAX;

                for dz in [-1, 0, 1] {
                    let nz = z + dz * step;
                    if !(0..CHUNK_SIZE).contains(&nz) {
                        continue;
                    }
                    for dy in [-1, 0, 1] {
                        let ny = y + dy * step;
                        if !(0..CHUNK_SIZE).contains(&ny) {
                            continue;
                        }
                        for dx in [-1, 0, 1] {
                            let nx = x + dx * step;
                            if !(0..CHUNK_SIZE).contains(&nx) {
                                continue;
                            }

                            let candidate = input[cell_index(IVec3::new(nx, ny, nz))];
                            if !candidate.is_valid() {
                                continue;
                            }
                            let distance = points.get(candidate).distance_squared(position);
                            if distance < best_distance {
                                best_distance = distance;
                                best = candidate;
                            }
                        }
                    }
                }

                output[cell_index(cell)] = best;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::chunk::neighbor_slot;
    use crate::canvas::point::Point;

    fn hood_of<'a>(chunks: &'a [Chunk]) -> Neighborhood<'a> {
        let mut slots: [Option<&Chunk>; NEIGHBOR_SLOTS] = [None; NEIGHBOR_SLOTS];
        for chunk in chunks {
            slots[neighbor_slot(chunk.key())] = Some(chunk);
        }
        Neighborhood { key: IVec3::ZERO, chunks: slots }
    }

    fn chunk_with(key: IVec3, points: &[(IVec3, usize, f32)]) -> Chunk {
        let mut chunk = Chunk::new(key);
        chunk.points = points
            .iter()
            .map(|&(cell, axis, alpha)| Point::new(cell, axis, alpha, Vec3::Z))
            .collect();
        chunk
    }

    #[test]
    fn test_empty_neighborhood_is_invalid_everywhere() {
        let chunks = [Chunk::new(IVec3::ZERO)];
        let hood = hood_of(&chunks);
        let indices = flood(&hood, ChunkState::FloodedCorners);
        assert!(indices.iter().all(|index| !index.is_valid()));
    }

    #[test]
    fn test_single_point_reaches_every_cell() {
        let chunks = [chunk_with(IVec3::ZERO, &[(IVec3::new(1, 2, 3), 0, 0.5)])];
        let hood = hood_of(&chunks);
        let indices = flood(&hood, ChunkState::FloodedSelf);
        assert!(indices.iter().all(|index| index.is_valid() && index.slot() == SELF_SLOT));
    }

    #[test]
    fn test_seed_uses_both_cells_along_axis() {
        let chunks = [chunk_with(IVec3::ZERO, &[(IVec3::new(3, 3, 3), 1, 0.25)])];
        let hood = hood_of(&chunks);
        let points = NeighborhoodPoints::gather(&hood, ChunkState::FloodedSelf);
        let seeds = seed(&hood, &points, ChunkState::FloodedSelf);
        assert!(seeds[cell_index(IVec3::new(3, 3, 3))].is_valid());
        assert!(seeds[cell_index(IVec3::new(3, 4, 3))].is_valid());
        assert_eq!(seeds.iter().filter(|index| index.is_valid()).count(), 2);
    }

    #[test]
    fn test_neighbor_points_are_clamped_into_grid() {
        // A point in the +x face neighbor seeds the x = 7 boundary layer
        let chunks = [
            Chunk::new(IVec3::ZERO),
            chunk_with(IVec3::X, &[(IVec3::new(2, 4, 4), 0, 0.0)]),
        ];
        let hood = hood_of(&chunks);

        let self_only = flood(&hood, ChunkState::FloodedSelf);
        assert!(self_only.iter().all(|index| !index.is_valid()));

        let points = NeighborhoodPoints::gather(&hood, ChunkState::FloodedFaces);
        let seeds = seed(&hood, &points, ChunkState::FloodedFaces);
        let seeded = seeds[cell_index(IVec3::new(7, 4, 4))];
        assert!(seeded.is_valid());
        assert_eq!(points.get(seeded), Vec3::new(10.0, 4.0, 4.0));
    }

    #[test]
    fn test_tie_keeps_first_found() {
        // Two points equidistant from cell (4, 4, 4): the one seen first in
        // scan order (lower z) wins.
        let chunks = [chunk_with(
            IVec3::ZERO,
            &[(IVec3::new(4, 4, 6), 2, 0.0), (IVec3::new(4, 4, 2), 2, 0.0)],
        )];
        let hood = hood_of(&chunks);
        let indices = flood(&hood, ChunkState::FloodedSelf);
        let points = NeighborhoodPoints::gather(&hood, ChunkState::FloodedSelf);
        let winner = points.get(indices[cell_index(IVec3::new(4, 4, 4))]);
        assert_eq!(winner, Vec3::new(4.0, 4.0, 2.0));
    }
}
