//! Point set serialization and disk I/O.
//!
//! Only points are stored. Flood grids are rebuilt on load, so the format
//! never depends on the in-memory grid layout.

use std::path::{Path, PathBuf};

use glam::IVec3;
use rkyv::{Archive, Deserialize, Serialize};

use crate::canvas::chunk::{key_in_range, MAX_CHUNK_KEY};
use crate::canvas::lod::LodData;
use crate::canvas::point::Point;
use crate::core::error::Error;
use crate::core::types::Result;

/// Current archive version
pub const ARCHIVE_VERSION: u32 = 1;

/// Points of one chunk
#[derive(Debug, Clone, PartialEq, Archive, Deserialize, Serialize)]
pub struct ChunkRecord {
    pub key: [i32; 3],
    /// Packed points, see [`Point`]
    pub points: Vec<u64>,
}

impl ChunkRecord {
    /// Reject keys outside the addressable range and points with a bad axis
    fn validate(&self) -> Result<()> {
        if !key_in_range(IVec3::from_array(self.key)) {
            return Err(Error::Serialization(format!(
                "chunk key {:?} outside +-{}",
                self.key, MAX_CHUNK_KEY
            )));
        }
        if let Some(raw) = self.points.iter().find(|&&raw| Point::try_from_raw(raw).is_none()) {
            return Err(Error::Serialization(format!(
                "chunk {:?}: malformed point {:#018x}",
                self.key, raw
            )));
        }
        Ok(())
    }
}

/// Point set of one level of detail
#[derive(Debug, Clone, PartialEq, Archive, Deserialize, Serialize)]
pub struct LodArchive {
    pub version: u32,
    pub chunks: Vec<ChunkRecord>,
}

impl LodArchive {
    /// Capture the points of every non-empty chunk
    pub fn capture(lod: &LodData) -> Self {
        let chunks = lod
            .snapshot_points()
            .into_iter()
            .map(|(key, points)| ChunkRecord {
                key: key.to_array(),
                points: points.iter().map(Point::raw).collect(),
            })
            .collect();
        Self {
            version: ARCHIVE_VERSION,
            chunks,
        }
    }

    pub fn point_count(&self) -> usize {
        self.chunks.iter().map(|c| c.points.len()).sum()
    }
}

/// Serialize a level's points to compressed bytes
pub fn serialize_lod(lod: &LodData) -> Result<Vec<u8>> {
    let archive = LodArchive::capture(lod);
    let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&archive)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(lz4_flex::compress_prepend_size(&bytes))
}

/// Decompress and decode an archive without touching any level
pub fn decode_archive(data: &[u8]) -> Result<LodArchive> {
    let decompressed = lz4_flex::decompress_size_prepended(data)
        .map_err(|e| Error::Serialization(format!("LZ4 decompression failed: {}", e)))?;

    // Archived data must be read from an aligned buffer
    let mut aligned = rkyv::util::AlignedVec::<16>::new();
    aligned.extend_from_slice(&decompressed);

    let archived = rkyv::access::<ArchivedLodArchive, rkyv::rancor::Error>(&aligned)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    let archive: LodArchive = rkyv::deserialize::<LodArchive, rkyv::rancor::Error>(archived)
        .map_err(|e| Error::Serialization(e.to_string()))?;

    if archive.version != ARCHIVE_VERSION {
        return Err(Error::Serialization(format!(
            "unsupported archive version {} (expected {})",
            archive.version, ARCHIVE_VERSION
        )));
    }
    for record in &archive.chunks {
        record.validate()?;
    }
    Ok(archive)
}

/// Replace a level's points with the archived ones and re-flood.
///
/// Returns the number of points held afterwards, duplicates and overflow removed.
pub fn deserialize_into(data: &[u8], lod: &LodData) -> Result<usize> {
    let archive = decode_archive(data)?;
    let archived = archive.point_count();
    let chunks = archive
        .chunks
        .into_iter()
        .map(|record| {
            let points = record.points.into_iter().map(Point::from_raw).collect();
            (IVec3::from_array(record.key), points)
        })
        .collect();
    let stats = lod.replace_points(chunks);
    let count = lod.stats().points;
    log::debug!(
        "Loaded {} of {} archived points, {} grids computed",
        count,
        archived,
        stats.computed
    );
    Ok(count)
}

/// Get the file path for a level
pub fn lod_path(base_dir: &Path, lod: usize) -> PathBuf {
    base_dir.join(format!("lod_{}.pcl", lod))
}

/// Save a level to disk (sync)
pub fn save_lod_sync(base_dir: &Path, lod_index: usize, lod: &LodData) -> Result<PathBuf> {
    let path = lod_path(base_dir, lod_index);
    std::fs::create_dir_all(base_dir)?;
    let compressed = serialize_lod(lod)?;
    std::fs::write(&path, &compressed)?;
    log::info!("Saved LOD {} to {} ({} bytes)", lod_index, path.display(), compressed.len());
    Ok(path)
}

/// Load a level from disk (sync). Returns `None` when there is no file.
pub fn load_lod_sync(base_dir: &Path, lod_index: usize, lod: &LodData) -> Result<Option<usize>> {
    let path = lod_path(base_dir, lod_index);
    if !path.exists() {
        return Ok(None);
    }
    let compressed = std::fs::read(&path)?;
    let count = deserialize_into(&compressed, lod)?;
    log::info!("Loaded LOD {} from {} ({} points)", lod_index, path.display(), count);
    Ok(Some(count))
}

/// Save a level to disk
pub async fn save_lod(base_dir: &Path, lod_index: usize, lod: &LodData) -> Result<PathBuf> {
    let path = lod_path(base_dir, lod_index);
    tokio::fs::create_dir_all(base_dir).await?;

    let compressed = serialize_lod(lod)?;
    tokio::fs::write(&path, compressed).await?;

    Ok(path)
}

/// Load a level from disk (if it exists)
pub async fn load_lod(base_dir: &Path, lod_index: usize, lod: &LodData) -> Result<Option<usize>> {
    let path = lod_path(base_dir, lod_index);
    if !tokio::fs::try_exists(&path).await? {
        return Ok(None);
    }

    let compressed = tokio::fs::read(&path).await?;
    deserialize_into(&compressed, lod).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::config::CanvasConfig;
    use crate::canvas::shapes;
    use glam::Vec3;

    fn sphere_lod() -> LodData {
        let lod = LodData::new(CanvasConfig::default());
        lod.add_points(&shapes::sphere(Vec3::splat(2.0), 6.0, 8, 16)).unwrap();
        lod
    }

    #[test]
    fn test_lod_path() {
        let path = lod_path(Path::new("/tmp/canvas"), 2);
        assert_eq!(path, PathBuf::from("/tmp/canvas/lod_2.pcl"));
    }

    #[test]
    fn test_reload_rebuilds_same_field() {
        let source = sphere_lod();
        let bytes = serialize_lod(&source).unwrap();

        let target = LodData::new(CanvasConfig::default());
        let count = deserialize_into(&bytes, &target).unwrap();
        assert_eq!(count, source.stats().points);
        assert_eq!(target.stats(), source.stats());
        assert_eq!(target.render_counter(), 1);

        for sample in [Vec3::splat(2.0), Vec3::new(8.5, 2.0, 2.0), Vec3::new(-3.0, 1.0, 4.0)] {
            assert_eq!(
                source.find_closest_position(sample),
                target.find_closest_position(sample)
            );
        }
    }

    #[test]
    fn test_corrupt_and_unknown_version_rejected() {
        let lod = LodData::new(CanvasConfig::default());
        assert!(matches!(deserialize_into(&[1, 2, 3], &lod), Err(Error::Serialization(_))));

        let archive = LodArchive { version: 99, chunks: Vec::new() };
        assert!(matches!(deserialize_into(&compress(&archive), &lod), Err(Error::Serialization(_))));
    }

    fn compress(archive: &LodArchive) -> Vec<u8> {
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(archive).unwrap();
        lz4_flex::compress_prepend_size(&bytes)
    }

    fn single_chunk(key: [i32; 3], points: Vec<u64>) -> LodArchive {
        LodArchive {
            version: ARCHIVE_VERSION,
            chunks: vec![ChunkRecord { key, points }],
        }
    }

    #[test]
    fn test_malformed_point_rejected() {
        let lod = LodData::new(CanvasConfig::default());
        let bytes = compress(&single_chunk([0, 0, 0], vec![3 << 9]));
        assert!(matches!(deserialize_into(&bytes, &lod), Err(Error::Serialization(_))));
        assert_eq!(lod.stats().chunks, 0);
        assert_eq!(lod.render_counter(), 0);
    }

    #[test]
    fn test_out_of_range_key_rejected() {
        let lod = LodData::new(CanvasConfig::default());
        let point = Point::new(glam::IVec3::ZERO, 0, 0.5, Vec3::X).raw();
        for key in [[i32::MAX, 0, 0], [0, i32::MIN, 0], [0, 0, MAX_CHUNK_KEY + 1]] {
            let bytes = compress(&single_chunk(key, vec![point]));
            assert!(matches!(deserialize_into(&bytes, &lod), Err(Error::Serialization(_))));
        }
        assert_eq!(lod.stats().chunks, 0);

        // The last addressable key still loads and floods
        let bytes = compress(&single_chunk([MAX_CHUNK_KEY, 0, -MAX_CHUNK_KEY], vec![point]));
        assert_eq!(deserialize_into(&bytes, &lod).unwrap(), 1);
        assert_eq!(lod.stats().ready_chunks, 27);
    }

    #[test]
    fn test_loaded_count_excludes_duplicates() {
        let lod = LodData::new(CanvasConfig::default());
        let point = Point::new(glam::IVec3::splat(2), 1, 0.25, Vec3::Y).raw();
        let bytes = compress(&single_chunk([0, 0, 0], vec![point, point, point]));
        assert_eq!(decode_archive(&bytes).unwrap().point_count(), 3);
        assert_eq!(deserialize_into(&bytes, &lod).unwrap(), 1);
    }

    #[test]
    fn test_save_load_sync() {
        let dir = tempfile::tempdir().unwrap();
        let source = sphere_lod();
        let path = save_lod_sync(dir.path(), 0, &source).unwrap();
        assert!(path.exists());

        let target = LodData::new(CanvasConfig::default());
        assert_eq!(load_lod_sync(dir.path(), 1, &target).unwrap(), None);
        let count = load_lod_sync(dir.path(), 0, &target).unwrap();
        assert_eq!(count, Some(source.stats().points));
    }

    #[tokio::test]
    async fn test_save_load_async() {
        let dir = tempfile::tempdir().unwrap();
        let source = sphere_lod();
        save_lod(dir.path(), 0, &source).await.unwrap();

        let target = LodData::new(CanvasConfig::default());
        assert_eq!(load_lod(dir.path(), 3, &target).await.unwrap(), None);
        let count = load_lod(dir.path(), 0, &target).await.unwrap();
        assert_eq!(count, Some(source.stats().points));
        assert_eq!(target.snapshot_points(), source.snapshot_points());
    }
}
