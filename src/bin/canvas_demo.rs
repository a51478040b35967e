//! Build a shape, insert it into a canvas and print what the field answers.
//!
//! Usage:
//!   cargo run --release --bin canvas_demo -- --shape sphere --size 24
//!   cargo run --release --bin canvas_demo -- --shape cube --edit --save out/canvas

use std::path::PathBuf;
use std::time::Instant;

use glam::Vec3;

use pointcanvas::canvas::{shapes, CanvasConfig, CanvasData};
use pointcanvas::core::logging;
use pointcanvas::core::types::Result;
use pointcanvas::streaming::disk_io;

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("canvas_demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let shape = arg_value(&args, "--shape").unwrap_or("sphere");
    let size: f32 = arg_value(&args, "--size")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20.0);
    let edit = args.iter().any(|a| a == "--edit");
    let save_dir = arg_value(&args, "--save").map(PathBuf::from);

    let config = match arg_value(&args, "--config") {
        Some(path) => CanvasConfig::load_sync(path.as_ref())?,
        None => CanvasConfig::default(),
    };

    let vertices = match shape {
        "cube" => shapes::cube(Vec3::ZERO, Vec3::splat(size)),
        "sphere" => shapes::sphere(Vec3::splat(size * 0.5), size * 0.5, 24, 48),
        other => {
            log::warn!("Unknown shape '{}', using sphere", other);
            shapes::sphere(Vec3::splat(size * 0.5), size * 0.5, 24, 48)
        }
    };
    log::info!("Built {} with {} triangles", shape, vertices.len() / 3);

    let canvas = CanvasData::new(config)?;

    let start = Instant::now();
    let report = canvas.add_points(&vertices)?;
    log::info!(
        "Inserted {} points into {} chunks in {:.1} ms ({} triangles rejected, {} points dropped)",
        report.points_added,
        report.chunks_touched,
        start.elapsed().as_secs_f64() * 1000.0,
        report.rejected_triangles,
        report.points_dropped
    );

    for (index, lod) in canvas.lods().iter().enumerate() {
        let stats = lod.stats();
        log::info!(
            "LOD {}: {} chunks ({} with points, {} ready), {} points, {} grids ({} KiB)",
            index,
            stats.chunks,
            stats.non_empty_chunks,
            stats.ready_chunks,
            stats.points,
            stats.unique_grids,
            stats.grid_bytes / 1024
        );
    }

    let lod = canvas.first_lod();
    let center = Vec3::splat(size * 0.5);
    let samples = [
        center,
        center + Vec3::new(size * 0.5, 0.0, 0.0),
        center + Vec3::new(size * 0.5 + 3.0, 0.0, 0.0),
        Vec3::splat(size * 10.0),
    ];
    let distances = lod.sample_distances(&samples, true);
    for (sample, distance) in samples.iter().zip(&distances) {
        log::info!("distance at {:?}: {:.3}", sample, distance);
    }

    if edit {
        let start = Instant::now();
        let report = lod.edit_points(|_| true, |_| {})?;
        log::info!(
            "Identity edit: {} triangles re-inserted in {:.1} ms",
            report.triangles,
            start.elapsed().as_secs_f64() * 1000.0
        );
        let after = lod.sample_distances(&samples, true);
        for (sample, distance) in samples.iter().zip(&after) {
            log::info!("after edit, distance at {:?}: {:.3}", sample, distance);
        }
    }

    if let Some(dir) = save_dir {
        let path = disk_io::save_lod_sync(&dir, 0, lod)?;
        log::info!("Saved LOD 0 to {}", path.display());
    }

    Ok(())
}
