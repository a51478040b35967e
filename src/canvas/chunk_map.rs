//! Sparse chunk map: neighborhood resolution, state transitions and bulk flooding.
//!
//! Chunks refer to each other by key only. A neighbor slot is resolved by
//! looking up `key + slot_offset(slot)` in the map, so there are no stored
//! neighbor pointers to keep in sync.

use std::collections::HashMap;
use std::sync::Arc;

use glam::IVec3;

use super::chunk::{
    slot_offset, Chunk, ChunkState, CORNER_SLOTS, EDGE_SLOTS, FACE_SLOTS, NEIGHBOR_SLOTS,
};
use super::jump_flood::{self, Neighborhood};

/// Counters from one bulk flood, for diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodStats {
    pub removed: usize,
    pub created: usize,
    pub computed: usize,
    pub shared: usize,
}

#[derive(Debug, Default)]
pub struct ChunkMap {
    chunks: HashMap<IVec3, Chunk>,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, key: IVec3) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    pub fn contains(&self, key: IVec3) -> bool {
        self.chunks.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.chunks.keys().copied()
    }

    pub(crate) fn get_mut(&mut self, key: IVec3) -> Option<&mut Chunk> {
        self.chunks.get_mut(&key)
    }

    /// Get a chunk, creating an empty one if needed. Creation changes no point set.
    pub fn find_or_add(&mut self, key: IVec3) -> &mut Chunk {
        self.chunks.entry(key).or_insert_with(|| Chunk::new(key))
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Resolve the 27 neighbor slots of `key`. Slot 13 is the chunk itself.
    pub fn neighborhood(&self, key: IVec3) -> Neighborhood<'_> {
        let mut chunks = [None; NEIGHBOR_SLOTS];
        for (slot, chunk) in chunks.iter_mut().enumerate() {
            *chunk = self.chunks.get(&(key + slot_offset(slot)));
        }
        Neighborhood { key, chunks }
    }

    /// Demote a chunk to `state`, cascading outward one radius class at a time.
    ///
    /// No-op unless `state` is lower than the chunk's current state. The
    /// cascade depends on how far the chunk had progressed: dropping a chunk
    /// that had reached Faces also pulls its edge ring back, and so on.
    pub fn invalidate(&mut self, key: IVec3, state: ChunkState) {
        let Some(chunk) = self.chunks.get_mut(&key) else { return };
        if state >= chunk.state() {
            return;
        }
        let previous = chunk.demote(state);

        match state {
            ChunkState::Uninitialized => {
                self.invalidate_ring(key, &FACE_SLOTS, ChunkState::FloodedSelf);
                if previous >= ChunkState::FloodedFaces {
                    self.invalidate_ring(key, &EDGE_SLOTS, ChunkState::FloodedFaces);
                }
                if previous >= ChunkState::FloodedEdges {
                    self.invalidate_ring(key, &CORNER_SLOTS, ChunkState::FloodedEdges);
                }
            }
            ChunkState::FloodedSelf => {
                self.invalidate_ring(key, &EDGE_SLOTS, ChunkState::FloodedFaces);
                if previous >= ChunkState::FloodedEdges {
                    self.invalidate_ring(key, &CORNER_SLOTS, ChunkState::FloodedEdges);
                }
            }
            ChunkState::FloodedFaces => {
                self.invalidate_ring(key, &CORNER_SLOTS, ChunkState::FloodedEdges);
            }
            // Nothing depends on a chunk's corner ring but the chunk itself
            ChunkState::FloodedEdges | ChunkState::FloodedCorners => {}
        }
    }

    /// The point set of `key` changed: drop it to Uninitialized and demote
    /// every neighbor whose grid may include its points, whatever state the
    /// chunk itself was in.
    pub fn mark_points_changed(&mut self, key: IVec3) {
        self.invalidate(key, ChunkState::Uninitialized);
        self.invalidate_ring(key, &FACE_SLOTS, ChunkState::FloodedSelf);
        self.invalidate_ring(key, &EDGE_SLOTS, ChunkState::FloodedFaces);
        self.invalidate_ring(key, &CORNER_SLOTS, ChunkState::FloodedEdges);
    }

    fn invalidate_ring(&mut self, key: IVec3, slots: &[usize], state: ChunkState) {
        for &slot in slots {
            self.invalidate(key + slot_offset(slot), state);
        }
    }

    /// Advance a chunk up to `target`, one state at a time. No-op when already there.
    ///
    /// Returns how many grids were computed from scratch.
    pub fn advance(&mut self, key: IVec3, target: ChunkState) -> usize {
        let mut computed = 0;
        loop {
            let Some(chunk) = self.chunks.get(&key) else { return computed };
            let current = chunk.state();
            if current >= target {
                return computed;
            }
            let Some(next) = current.next() else { return computed };
            if self.advance_once(key, next) {
                computed += 1;
            }
        }
    }

    /// Single legal step `current -> next`. Returns true if a new grid was flooded.
    fn advance_once(&mut self, key: IVec3, next: ChunkState) -> bool {
        let (grid, computed) = {
            let hood = self.neighborhood(key);
            let Some(chunk) = hood.center() else { return false };
            let current = chunk.state();
            debug_assert_eq!(current.next(), Some(next));

            // Share the previous grid when the new ring adds nothing
            let previous = chunk.grid(current).filter(|_| !hood.ring_has_points(next));
            match previous {
                Some(grid) => (Arc::clone(grid), false),
                None => (Arc::new(jump_flood::flood(&hood, next)), true),
            }
        };

        if let Some(chunk) = self.chunks.get_mut(&key) {
            chunk.publish(next, grid);
        }
        computed
    }

    /// Cleanup, border maintenance, then flood every chunk state by state.
    pub fn jump_flood_chunks(&mut self) -> FloodStats {
        let mut stats = FloodStats::default();

        // Remove chunks with no points at all in their neighborhood
        let mut to_remove: Vec<IVec3> = self
            .chunks
            .keys()
            .copied()
            .filter(|&key| {
                !self
                    .neighborhood(key)
                    .chunks
                    .iter()
                    .flatten()
                    .any(|chunk| chunk.has_points())
            })
            .collect();
        to_remove.sort_by_key(|key| key.to_array());
        for key in to_remove {
            self.chunks.remove(&key);
            self.invalidate_ring(key, &FACE_SLOTS, ChunkState::FloodedSelf);
            self.invalidate_ring(key, &EDGE_SLOTS, ChunkState::FloodedFaces);
            self.invalidate_ring(key, &CORNER_SLOTS, ChunkState::FloodedEdges);
            stats.removed += 1;
        }

        // Keep a 1 chunk wide border around every chunk with points
        let populated: Vec<IVec3> = self
            .chunks
            .values()
            .filter(|chunk| chunk.has_points())
            .map(Chunk::key)
            .collect();
        for key in populated {
            for slot in 0..NEIGHBOR_SLOTS {
                let neighbor = key + slot_offset(slot);
                if !self.chunks.contains_key(&neighbor) {
                    self.chunks.insert(neighbor, Chunk::new(neighbor));
                    stats.created += 1;
                }
            }
        }

        // Every chunk must finish a state before any chunk starts the next
        let keys: Vec<IVec3> = self.chunks.keys().copied().collect();
        for state in ChunkState::FLOODED {
            for &key in &keys {
                let before = self.chunks.get(&key).map(Chunk::state);
                let computed = self.advance(key, state);
                stats.computed += computed;
                if before < Some(state) {
                    stats.shared += 1 - computed.min(1);
                }
            }
        }

        log::debug!(
            "Jump flood: {} chunks ({} removed, {} created), {} grids computed, {} shared",
            self.chunks.len(),
            stats.removed,
            stats.created,
            stats.computed,
            stats.shared
        );
        stats
    }
}
