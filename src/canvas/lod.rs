//! One level of detail: a lock-guarded chunk map plus the operations that
//! insert, edit and query its points.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use glam::{IVec3, Vec3, Vec4};
use rayon::prelude::*;

use super::chunk::{chunk_key_of, fit_to_capacity, Indices, CHUNK_SIZE};
use super::chunk_map::{ChunkMap, FloodStats};
use super::config::CanvasConfig;
use super::extract::generate_triangles;
use super::point::Point;
use super::query::PointQuery;
use super::rasterize::rasterize_triangle;
use crate::core::error::Error;
use crate::core::types::Result;
use crate::math::IntBox;

/// Positions answered per rayon task in batched sampling
const SAMPLE_BATCH: usize = 256;

/// Outcome of one point insertion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertReport {
    pub triangles: usize,
    pub rejected_triangles: usize,
    /// Net growth of the point count over the touched chunks
    pub points_added: usize,
    /// Points discarded because a chunk was full
    pub points_dropped: usize,
    pub chunks_touched: usize,
}

/// Memory and progress counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LodStats {
    pub chunks: usize,
    pub non_empty_chunks: usize,
    pub points: usize,
    pub ready_chunks: usize,
    /// Distinct grid allocations across the map, shared grids counted once
    pub unique_grids: usize,
    pub grid_bytes: usize,
}

#[derive(Default)]
struct LodInner {
    chunks: ChunkMap,
    last_vertices: Vec<Vec3>,
}

/// Read access to a level, held for a batch of queries
pub struct LodReadGuard<'a> {
    inner: RwLockReadGuard<'a, LodInner>,
}

impl LodReadGuard<'_> {
    pub fn chunks(&self) -> &ChunkMap {
        &self.inner.chunks
    }

    /// New query cursor bound to this guard
    pub fn query(&self) -> PointQuery<'_> {
        PointQuery::new(&self.inner.chunks)
    }
}

/// A sparse chunked point field, flooded for nearest-point queries.
///
/// All mutation runs under the write lock for its whole duration; queries
/// share the read lock. `render_counter` is bumped after every structural
/// change and can be polled without locking.
pub struct LodData {
    inner: RwLock<LodInner>,
    render_counter: AtomicU64,
    config: CanvasConfig,
}

impl LodData {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            inner: RwLock::new(LodInner::default()),
            render_counter: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    fn write(&self) -> RwLockWriteGuard<'_, LodInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read(&self) -> LodReadGuard<'_> {
        LodReadGuard {
            inner: self.inner.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Bumped on every structural change
    pub fn render_counter(&self) -> u64 {
        self.render_counter.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.render_counter.fetch_add(1, Ordering::AcqRel);
    }

    /// Rasterize a triangle soup into points and re-flood.
    pub fn add_points(&self, vertices: &[Vec3]) -> Result<InsertReport> {
        let report = {
            let mut inner = self.write();
            inner.add_points(vertices, &self.config)?
        };
        self.bump();
        Ok(report)
    }

    /// Cleanup, border maintenance and flood of every chunk
    pub fn jump_flood_chunks(&self) -> FloodStats {
        let stats = self.write().chunks.jump_flood_chunks();
        self.bump();
        stats
    }

    /// Re-extract the surface of the chunks selected by `should_visit`, let
    /// `edit` mutate the triangles in place, then insert them again.
    ///
    /// Only chunks holding points are offered to `should_visit`, with their
    /// cell bounds.
    pub fn edit_points(
        &self,
        mut should_visit: impl FnMut(&IntBox) -> bool,
        edit: impl FnOnce(&mut [Vec3]),
    ) -> Result<InsertReport> {
        let report = {
            let mut inner = self.write();

            let mut keys: Vec<IVec3> = inner
                .chunks
                .iter()
                .filter(|chunk| chunk.has_points())
                .map(|chunk| chunk.key())
                .filter(|&key| should_visit(&IntBox::from_chunk_key(key, CHUNK_SIZE)))
                .collect();
            keys.sort_by_key(|key| key.to_array());

            let mut vertices = Vec::new();
            {
                let mut query = PointQuery::new(&inner.chunks);
                for &key in &keys {
                    generate_triangles(
                        &mut query,
                        key * CHUNK_SIZE,
                        self.config.surface_scale,
                        &mut vertices,
                    );
                }
            }
            log::debug!(
                "Edit: extracted {} triangles from {} chunks",
                vertices.len() / 3,
                keys.len()
            );

            for &key in &keys {
                if let Some(chunk) = inner.chunks.get_mut(key) {
                    chunk.points.clear();
                }
                inner.chunks.mark_points_changed(key);
            }

            edit(&mut vertices);
            inner.add_points(&vertices, &self.config)?
        };
        self.bump();
        Ok(report)
    }

    /// Union of every chunk's cell bounds, border chunks included
    pub fn bounds(&self) -> IntBox {
        let guard = self.read();
        guard
            .chunks()
            .keys()
            .map(|key| IntBox::from_chunk_key(key, CHUNK_SIZE))
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default()
    }

    /// Every point as `(position, axis)`, for debug display
    pub fn all_points(&self) -> Vec<Vec4> {
        let guard = self.read();
        let chunks = guard.chunks();
        let mut points = Vec::with_capacity(chunks.iter().map(|c| c.points().len()).sum());
        for chunk in chunks.iter() {
            let origin = chunk.origin().as_vec3();
            for point in chunk.points() {
                points.push((origin + point.position()).extend(point.axis() as f32));
            }
        }
        points
    }

    pub fn chunk_bounds(&self) -> Vec<IntBox> {
        let guard = self.read();
        guard
            .chunks()
            .keys()
            .map(|key| IntBox::from_chunk_key(key, CHUNK_SIZE))
            .collect()
    }

    /// Signed distance to the nearest point, `None` where the field has no answer
    pub fn find_closest_position(&self, position: Vec3) -> Option<f32> {
        self.read().query().find_closest_position(position)
    }

    /// Signed distances for many positions under a single read lock.
    ///
    /// Misses map to `miss_distance`.
    pub fn sample_distances(&self, positions: &[Vec3], interpolate: bool) -> Vec<f32> {
        let guard = self.read();
        let chunks = guard.chunks();
        let miss = self.config.miss_distance;

        let mut distances = vec![miss; positions.len()];
        distances
            .par_chunks_mut(SAMPLE_BATCH)
            .zip(positions.par_chunks(SAMPLE_BATCH))
            .for_each(|(out, positions)| {
                let mut query = PointQuery::new(chunks);
                for (distance, &position) in out.iter_mut().zip(positions) {
                    let sample = if interpolate {
                        query.interpolated_distance(position)
                    } else {
                        query.find_closest_position(position)
                    };
                    *distance = sample.unwrap_or(miss);
                }
            });
        distances
    }

    /// Last rasterized triangle soup
    pub fn last_vertices(&self) -> Vec<Vec3> {
        self.read().inner.last_vertices.clone()
    }

    pub fn stats(&self) -> LodStats {
        let guard = self.read();
        let mut stats = LodStats::default();
        for chunk in guard.chunks().iter() {
            stats.chunks += 1;
            stats.points += chunk.points().len();
            if chunk.has_points() {
                stats.non_empty_chunks += 1;
            }
            if chunk.is_ready() {
                stats.ready_chunks += 1;
            }
            stats.unique_grids += chunk.unique_grids();
        }
        stats.grid_bytes = stats.unique_grids * std::mem::size_of::<Indices>();
        stats
    }

    /// Point arrays of every non-empty chunk, sorted by key
    pub(crate) fn snapshot_points(&self) -> Vec<(IVec3, Vec<Point>)> {
        let guard = self.read();
        let mut chunks: Vec<(IVec3, Vec<Point>)> = guard
            .chunks()
            .iter()
            .filter(|chunk| chunk.has_points())
            .map(|chunk| (chunk.key(), chunk.points().to_vec()))
            .collect();
        chunks.sort_by_key(|(key, _)| key.to_array());
        chunks
    }

    /// Replace the whole point set, then re-flood
    pub(crate) fn replace_points(&self, chunks: Vec<(IVec3, Vec<Point>)>) -> FloodStats {
        let stats = {
            let mut inner = self.write();
            inner.chunks.clear();
            inner.last_vertices.clear();
            for (key, mut points) in chunks {
                points.sort_unstable();
                points.dedup();
                let dropped = fit_to_capacity(&mut points);
                if dropped > 0 {
                    log::warn!("Chunk {:?} is full: dropped {} loaded points", key, dropped);
                }
                inner.chunks.find_or_add(key).points = points;
            }
            inner.chunks.jump_flood_chunks()
        };
        self.bump();
        stats
    }
}

impl LodInner {
    fn add_points(&mut self, vertices: &[Vec3], config: &CanvasConfig) -> Result<InsertReport> {
        if vertices.len() % 3 != 0 {
            return Err(Error::InvalidVertexCount(vertices.len()));
        }
        self.last_vertices = vertices.to_vec();

        let mut report = InsertReport {
            triangles: vertices.len() / 3,
            ..Default::default()
        };

        let mut staged: HashMap<IVec3, Vec<Point>> = HashMap::new();
        for triangle in vertices.chunks_exact(3) {
            let accepted = rasterize_triangle(
                triangle[0],
                triangle[1],
                triangle[2],
                config.max_triangle_cells,
                |crossing| {
                    let key = chunk_key_of(crossing.cell);
                    staged.entry(key).or_default().push(Point::new(
                        crossing.cell - key * CHUNK_SIZE,
                        crossing.axis,
                        crossing.alpha,
                        crossing.normal,
                    ));
                },
            );
            if !accepted {
                report.rejected_triangles += 1;
                log::warn!(
                    "Skipping triangle {:?} {:?} {:?}: covers more than {} cells or leaves the addressable range",
                    triangle[0],
                    triangle[1],
                    triangle[2],
                    config.max_triangle_cells
                );
            }
        }

        let mut staged: Vec<(IVec3, Vec<Point>)> = staged.into_iter().collect();
        staged.sort_by_key(|(key, _)| key.to_array());

        for (key, points) in staged {
            let chunk = self.chunks.find_or_add(key);
            let before = chunk.points.len();
            chunk.points.extend(points);
            // Canonical order: the flood must not depend on triangle order
            chunk.points.sort_unstable();
            chunk.points.dedup();

            let merged = chunk.points.len();
            let dropped = fit_to_capacity(&mut chunk.points);
            if dropped > 0 {
                log::warn!(
                    "Chunk {:?} is full: dropping {} of {} points",
                    key,
                    dropped,
                    merged
                );
                report.points_dropped += dropped;
            }

            report.points_added += chunk.points.len().saturating_sub(before);
            report.chunks_touched += 1;
            self.chunks.mark_points_changed(key);
        }

        self.chunks.jump_flood_chunks();

        log::debug!(
            "Added {} points to {} chunks from {} triangles ({} rejected)",
            report.points_added,
            report.chunks_touched,
            report.triangles,
            report.rejected_triangles
        );
        Ok(report)
    }
}
