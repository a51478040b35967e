//! Mathematical utilities and data structures

pub mod aabb;
pub mod int_box;
pub mod ray;

pub use aabb::Aabb;
pub use int_box::IntBox;
pub use ray::{Ray, triangle_normal};
