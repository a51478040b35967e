//! Canvas configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Tunables shared by every level of a canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Triangles whose integer bounds cover more cells are skipped
    pub max_triangle_cells: u64,
    /// Inflation applied to extracted triangles about their centroid
    pub surface_scale: f32,
    /// Distance reported for positions the field cannot answer
    pub miss_distance: f32,
    /// Number of levels of detail, LOD 0 included
    pub lod_count: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_triangle_cells: 1024 * 1024,
            surface_scale: 1.01,
            miss_distance: 1e6,
            lod_count: 1,
        }
    }
}

impl CanvasConfig {
    /// Reject values the canvas cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.lod_count == 0 {
            return Err(Error::Config("lod_count must be at least 1".into()));
        }
        if self.surface_scale.is_nan() || self.surface_scale <= 0.0 {
            return Err(Error::Config(format!(
                "surface_scale must be positive, got {}",
                self.surface_scale
            )));
        }
        if self.max_triangle_cells == 0 {
            return Err(Error::Config("max_triangle_cells must be non-zero".into()));
        }
        Ok(())
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync) and validate
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CanvasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_triangle_cells, 1_048_576);
        assert_eq!(config.lod_count, 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CanvasConfig { lod_count: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = CanvasConfig { surface_scale: f32::NAN, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = CanvasConfig { max_triangle_cells: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_load_and_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("canvas.json");

        let config = CanvasConfig { lod_count: 3, surface_scale: 1.05, ..Default::default() };
        config.save_sync(&path).unwrap();
        assert_eq!(CanvasConfig::load_sync(&path).unwrap(), config);

        // Missing fields fall back to defaults
        std::fs::write(&path, r#"{ "lod_count": 2 }"#).unwrap();
        let loaded = CanvasConfig::load_sync(&path).unwrap();
        assert_eq!(loaded.lod_count, 2);
        assert_eq!(loaded.miss_distance, 1e6);

        std::fs::write(&path, r#"{ "lod_count": 0 }"#).unwrap();
        assert!(CanvasConfig::load_sync(&path).is_err());
    }
}
