//! Core/common math functions for working with 2D vectors, headings, and segment intersections.
mod base_math;
mod seg_seg_intersect;
mod vector2;

pub use base_math::*;
pub use seg_seg_intersect::{seg_seg_intr, SegSegIntr};
pub use vector2::{vec2, Vector2};
