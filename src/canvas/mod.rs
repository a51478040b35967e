//! Sparse chunked point canvas.
//!
//! Triangles are rasterized into packed edge-crossing points, stored in 8^3
//! chunks, and jump-flooded so every cell knows its nearest point. Queries read
//! the flooded grids to answer nearest-point and signed-distance lookups.

pub mod point;
pub mod chunk;
pub mod jump_flood;
pub mod chunk_map;
pub mod rasterize;
pub mod transvoxel;
pub mod extract;
pub mod query;
pub mod config;
pub mod lod;
pub mod data;
pub mod shapes;

pub use chunk::{Chunk, ChunkState, CHUNK_SIZE};
pub use chunk_map::{ChunkMap, FloodStats};
pub use config::CanvasConfig;
pub use data::{CanvasData, DistanceSampler};
pub use lod::{InsertReport, LodData, LodReadGuard, LodStats};
pub use point::{Point, PointIndex};
pub use query::{ClosestPoint, PointQuery};
