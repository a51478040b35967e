//! Fixed-size cubic blocks of the point field and their flood state

use std::sync::Arc;

use glam::IVec3;

use super::point::{Point, PointIndex};

/// Cells per chunk side. Must stay a power of two: the flood runs passes 4, 2, 1.
pub const CHUNK_SIZE: i32 = 8;
pub const CHUNK_SIZE_LOG2: i32 = 3;
/// Cells per chunk
pub const CHUNK_CELLS: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// 3x3x3 neighborhood, self included
pub const NEIGHBOR_SLOTS: usize = 27;
pub const SELF_SLOT: usize = 13;

/// Point slots addressable by a [`PointIndex`] (10 bits)
pub const MAX_POINTS_PER_CHUNK: usize = 1024;

/// Largest chunk key component. Keeps `(key + 2) * CHUNK_SIZE` inside `i32`
/// for border chunks and their cell bounds.
pub const MAX_CHUNK_KEY: i32 = i32::MAX / CHUNK_SIZE - 2;

/// Largest vertex coordinate accepted for rasterization
pub const MAX_COORDINATE: f32 = (1 << 30) as f32;

/// Two crossings of the same edge less than 1/64 cell apart are one crossing
const DUPLICATE_ALPHA: u16 = 1024;

/// Nearest-point grid: one index per cell, x fastest
pub type Indices = [PointIndex; CHUNK_CELLS];

/// Face-adjacent slots
pub const FACE_SLOTS: [usize; 6] = [12, 14, 10, 16, 4, 22];
/// Edge-adjacent slots
pub const EDGE_SLOTS: [usize; 12] = [9, 15, 3, 21, 11, 17, 5, 23, 1, 7, 19, 25];
/// Corner-adjacent slots
pub const CORNER_SLOTS: [usize; 8] = [0, 2, 6, 8, 18, 20, 24, 26];

/// Propagation state, strictly ordered.
///
/// Each flooded state incorporates the points of one more neighbor ring:
/// the chunk itself, then faces, edges and corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ChunkState {
    #[default]
    Uninitialized = 0,
    FloodedSelf = 1,
    FloodedFaces = 2,
    FloodedEdges = 3,
    FloodedCorners = 4,
}

impl ChunkState {
    /// Flooded states in advance order
    pub const FLOODED: [ChunkState; 4] = [
        ChunkState::FloodedSelf,
        ChunkState::FloodedFaces,
        ChunkState::FloodedEdges,
        ChunkState::FloodedCorners,
    ];

    pub fn next(self) -> Option<ChunkState> {
        match self {
            ChunkState::Uninitialized => Some(ChunkState::FloodedSelf),
            ChunkState::FloodedSelf => Some(ChunkState::FloodedFaces),
            ChunkState::FloodedFaces => Some(ChunkState::FloodedEdges),
            ChunkState::FloodedEdges => Some(ChunkState::FloodedCorners),
            ChunkState::FloodedCorners => None,
        }
    }

    /// Neighbor slots newly incorporated when entering this state
    pub fn ring_slots(self) -> &'static [usize] {
        match self {
            ChunkState::Uninitialized => &[],
            ChunkState::FloodedSelf => &[SELF_SLOT],
            ChunkState::FloodedFaces => &FACE_SLOTS,
            ChunkState::FloodedEdges => &EDGE_SLOTS,
            ChunkState::FloodedCorners => &CORNER_SLOTS,
        }
    }

    /// Slot into the per-state grid array, `None` for Uninitialized
    fn grid_slot(self) -> Option<usize> {
        (self as usize).checked_sub(1)
    }
}

/// Neighbor slot for an offset in [-1, 1]^3
#[inline]
pub fn neighbor_slot(offset: IVec3) -> usize {
    ((offset.x + 1) + (offset.y + 1) * 3 + (offset.z + 1) * 9) as usize
}

/// Offset in [-1, 1]^3 for a neighbor slot
#[inline]
pub fn slot_offset(slot: usize) -> IVec3 {
    let slot = slot as i32;
    IVec3::new(slot % 3 - 1, slot / 3 % 3 - 1, slot / 9 - 1)
}

/// Linear cell index inside a chunk, x fastest
#[inline]
pub fn cell_index(local: IVec3) -> usize {
    (local.x + local.y * CHUNK_SIZE + local.z * CHUNK_SIZE * CHUNK_SIZE) as usize
}

/// Chunk key owning an integer cell (floor division)
#[inline]
pub fn chunk_key_of(cell: IVec3) -> IVec3 {
    IVec3::new(
        cell.x >> CHUNK_SIZE_LOG2,
        cell.y >> CHUNK_SIZE_LOG2,
        cell.z >> CHUNK_SIZE_LOG2,
    )
}

/// True if every component of `key` is addressable
#[inline]
pub fn key_in_range(key: IVec3) -> bool {
    key.cmpge(IVec3::splat(-MAX_CHUNK_KEY)).all() && key.cmple(IVec3::splat(MAX_CHUNK_KEY)).all()
}

/// Bring a canonical (sorted, deduplicated) point set down to
/// [`MAX_POINTS_PER_CHUNK`]. Returns how many points were dropped.
///
/// Near-duplicate crossings of the same edge go first. If the set is still
/// too large, points are dropped at an even stride in edge order so the loss
/// is spread over the chunk instead of hitting one normal direction. The
/// result is sorted again.
pub fn fit_to_capacity(points: &mut Vec<Point>) -> usize {
    let before = points.len();
    if before <= MAX_POINTS_PER_CHUNK {
        return 0;
    }

    points.sort_unstable_by_key(|p| (p.edge_bits(), p.alpha_bits(), p.raw()));
    points.dedup_by(|later, kept| {
        later.edge_bits() == kept.edge_bits()
            && later.alpha_bits() - kept.alpha_bits() < DUPLICATE_ALPHA
    });

    let len = points.len();
    if len > MAX_POINTS_PER_CHUNK {
        let kept: Vec<Point> = (0..MAX_POINTS_PER_CHUNK)
            .map(|i| points[i * len / MAX_POINTS_PER_CHUNK])
            .collect();
        *points = kept;
    }

    points.sort_unstable();
    before - points.len()
}

/// A single chunk: its points, flood state and per-state nearest-point grids.
///
/// Grids are immutable once published and shared between states whenever a
/// ring brought no new points.
#[derive(Debug)]
pub struct Chunk {
    key: IVec3,
    pub(crate) points: Vec<Point>,
    state: ChunkState,
    grids: [Option<Arc<Indices>>; 4],
}

impl Chunk {
    /// Create a new empty chunk at the given key
    pub fn new(key: IVec3) -> Self {
        Self {
            key,
            points: Vec::new(),
            state: ChunkState::Uninitialized,
            grids: Default::default(),
        }
    }

    pub fn key(&self) -> IVec3 {
        self.key
    }

    /// Cell coordinate of the chunk's minimum corner
    pub fn origin(&self) -> IVec3 {
        self.key * CHUNK_SIZE
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    /// Queries can be answered once the full neighborhood has been flooded
    pub fn is_ready(&self) -> bool {
        self.state == ChunkState::FloodedCorners && self.grids[3].is_some()
    }

    /// Grid for a flooded state at or below the current state
    pub fn grid(&self, state: ChunkState) -> Option<&Arc<Indices>> {
        if state > self.state {
            return None;
        }
        self.grids[state.grid_slot()?].as_ref()
    }

    /// Final nearest-point grid, only when ready
    pub fn ready_grid(&self) -> Option<&Indices> {
        if self.state != ChunkState::FloodedCorners {
            return None;
        }
        self.grids[3].as_deref()
    }

    /// Record the grid computed for the next state.
    pub(crate) fn publish(&mut self, state: ChunkState, grid: Arc<Indices>) {
        debug_assert_eq!(self.state.next(), Some(state), "advance out of order");
        if let Some(slot) = state.grid_slot() {
            self.grids[slot] = Some(grid);
            self.state = state;
        }
    }

    /// Lower the state, dropping grids above it. Returns the previous state.
    pub(crate) fn demote(&mut self, state: ChunkState) -> ChunkState {
        let previous = self.state;
        debug_assert!(state < previous, "invalidation must lower the state");
        self.state = state;
        for flooded in ChunkState::FLOODED {
            if flooded > state {
                if let Some(slot) = flooded.grid_slot() {
                    self.grids[slot] = None;
                }
            }
        }
        previous
    }

    /// Number of distinct grid allocations held (shared grids count once)
    pub fn unique_grids(&self) -> usize {
        let mut unique: Vec<&Arc<Indices>> = Vec::with_capacity(4);
        for grid in self.grids.iter().flatten() {
            if !unique.iter().any(|seen| Arc::ptr_eq(seen, grid)) {
                unique.push(grid);
            }
        }
        unique.len()
    }
}
