//! A canvas: one point field per level of detail, plus the brush-facing sampler.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use super::config::CanvasConfig;
use super::lod::{InsertReport, LodData};
use crate::core::types::Result;
use crate::math::{Aabb, IntBox};

/// All levels of one canvas. LOD 0 is authoritative; level `n` holds the
/// same surface at `1 / 2^n` scale.
pub struct CanvasData {
    lods: Vec<Arc<LodData>>,
    config: CanvasConfig,
}

impl CanvasData {
    pub fn new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        let lods = (0..config.lod_count)
            .map(|_| Arc::new(LodData::new(config.clone())))
            .collect();
        Ok(Self { lods, config })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn lods(&self) -> &[Arc<LodData>] {
        &self.lods
    }

    pub fn lod(&self, lod: usize) -> Option<&Arc<LodData>> {
        self.lods.get(lod)
    }

    /// Authoritative level. Always present: `lod_count` is at least 1.
    pub fn first_lod(&self) -> &Arc<LodData> {
        &self.lods[0]
    }

    /// Insert a triangle soup into every level. Returns LOD 0's report.
    pub fn add_points(&self, vertices: &[Vec3]) -> Result<InsertReport> {
        let report = self.first_lod().add_points(vertices)?;
        for (lod, data) in self.lods.iter().enumerate().skip(1) {
            let scale = 1.0 / (1u32 << lod) as f32;
            let scaled: Vec<Vec3> = vertices.iter().map(|v| *v * scale).collect();
            let lod_report = data.add_points(&scaled)?;
            log::debug!("LOD {}: {} points added", lod, lod_report.points_added);
        }
        Ok(report)
    }
}

/// Samples a canvas through a brush transform.
///
/// Positions come in the brush's local space and are mapped into canvas
/// cells; distances go back out scaled to local units.
pub struct DistanceSampler {
    canvas: Arc<CanvasData>,
    local_to_data: Mat4,
    data_to_local_scale: f32,
    bounds: Aabb,
}

impl DistanceSampler {
    pub fn new(canvas: Arc<CanvasData>, data_to_local: Mat4) -> Self {
        let local_to_data = data_to_local.inverse();
        let (scale, _, _) = data_to_local.to_scale_rotation_translation();
        let data_to_local_scale = scale.abs().max_element();

        let data_bounds: IntBox = canvas.first_lod().bounds().extend(1);
        let bounds = data_bounds.to_aabb().transformed(&data_to_local);

        Self {
            canvas,
            local_to_data,
            data_to_local_scale,
            bounds,
        }
    }

    /// Canvas bounds grown by one cell, in local space
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn data_to_local_scale(&self) -> f32 {
        self.data_to_local_scale
    }

    /// Signed distance at one local position
    pub fn distance(&self, local_position: Vec3) -> f32 {
        let lod = self.canvas.first_lod();
        let position = self.local_to_data.transform_point3(local_position);
        match lod.find_closest_position(position) {
            Some(distance) => distance * self.data_to_local_scale,
            None => self.canvas.config().miss_distance,
        }
    }

    /// Signed distances for a batch of local positions.
    ///
    /// Picks plain nearest-cell sampling when one canvas cell is no larger
    /// than `gradient_step`, trilinear sampling otherwise.
    pub fn distances(&self, local_positions: &[Vec3], gradient_step: f32) -> Vec<f32> {
        // Coarser levels are not sampled yet
        let lod = 0;
        let Some(data) = self.canvas.lod(lod) else {
            return vec![self.canvas.config().miss_distance; local_positions.len()];
        };

        let lod_scale = (1u32 << lod) as f32;
        let distance_scale = lod_scale * self.data_to_local_scale;
        let local_to_data = Mat4::from_scale(Vec3::splat(1.0 / lod_scale)) * self.local_to_data;

        let positions: Vec<Vec3> = local_positions
            .iter()
            .map(|p| local_to_data.transform_point3(*p))
            .collect();
        let interpolate = distance_scale > gradient_step;

        let miss = self.canvas.config().miss_distance;
        let mut distances = data.sample_distances(&positions, interpolate);
        for distance in &mut distances {
            if *distance != miss {
                *distance *= distance_scale;
            }
        }
        distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::shapes;

    fn cube_canvas(lod_count: usize) -> Arc<CanvasData> {
        let config = CanvasConfig { lod_count, ..Default::default() };
        let canvas = CanvasData::new(config).unwrap();
        canvas.add_points(&shapes::cube(Vec3::ZERO, Vec3::splat(16.0))).unwrap();
        Arc::new(canvas)
    }

    #[test]
    fn test_zero_lods_rejected() {
        let config = CanvasConfig { lod_count: 0, ..Default::default() };
        assert!(CanvasData::new(config).is_err());
    }

    #[test]
    fn test_lods_hold_scaled_copies() {
        let canvas = cube_canvas(3);
        assert_eq!(canvas.lods().len(), 3);

        let lod0 = canvas.first_lod().find_closest_position(Vec3::new(16.0, 8.0, 8.0)).unwrap();
        let lod1 = canvas.lod(1).unwrap().find_closest_position(Vec3::new(8.0, 4.0, 4.0)).unwrap();
        let lod2 = canvas.lod(2).unwrap().find_closest_position(Vec3::new(4.0, 2.0, 2.0)).unwrap();
        for distance in [lod0, lod1, lod2] {
            assert!(distance.abs() < 1e-3);
        }
        assert!(canvas.lod(1).unwrap().stats().points < canvas.first_lod().stats().points);
    }

    #[test]
    fn test_sampler_applies_transform_and_scale() {
        let canvas = cube_canvas(1);
        // Local space is the canvas scaled by 2 and shifted
        let data_to_local =
            Mat4::from_translation(Vec3::new(100.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let sampler = DistanceSampler::new(canvas, data_to_local);
        assert_eq!(sampler.data_to_local_scale(), 2.0);

        // Three cells outside the +x face
        let local = data_to_local.transform_point3(Vec3::new(19.0, 8.0, 8.0));
        assert!((sampler.distance(local) - 6.0).abs() < 1e-2);

        let bounds = sampler.bounds();
        assert!(bounds.contains_point(local));
        assert!(!bounds.contains_point(Vec3::ZERO));

        // Far outside: miss distance, never scaled
        assert_eq!(sampler.distance(Vec3::splat(-1000.0)), 1e6);
    }

    #[test]
    fn test_sampler_batch_modes_agree_on_lattice() {
        let canvas = cube_canvas(1);
        let sampler = DistanceSampler::new(canvas, Mat4::IDENTITY);
        let positions = [
            Vec3::new(19.0, 8.0, 8.0),
            Vec3::new(8.0, 8.0, -3.0),
            Vec3::splat(-1000.0),
        ];

        let nearest = sampler.distances(&positions, 10.0);
        let interpolated = sampler.distances(&positions, 0.5);
        assert!((nearest[0] - 3.0).abs() < 1e-3);
        assert!((nearest[1] - 3.0).abs() < 1e-3);
        for (a, b) in nearest.iter().zip(&interpolated) {
            assert!((a - b).abs() < 1e-3);
        }
        assert_eq!(nearest[2], 1e6);
    }
}
