//! Persistence of canvas point sets

pub mod disk_io;

pub use disk_io::{
    ChunkRecord, LodArchive, ARCHIVE_VERSION,
    serialize_lod, decode_archive, deserialize_into,
    save_lod, load_lod, save_lod_sync, load_lod_sync,
    lod_path,
};
