//! Pointcanvas - sparse chunked point field with jump-flood nearest-surface queries

pub mod core;
pub mod math;
pub mod canvas;
pub mod streaming;
