//! Euclidean distance kernels for `f32` vectors.
//!
//! Four competing strategies share the [`DistanceFn`] signature: a scalar
//! baseline, a scalar variant widened to `f64` before squaring, a 4-lane SIMD
//! kernel that widens every lane, and an 8-lane SIMD kernel that stays in
//! `f32` and falls back to 4 lanes then single elements for the tail.

mod kernel;
mod narrow_simd;
mod scalar;
mod wide_simd;

pub use kernel::{DistanceFn, Kernel, Precision};
pub use narrow_simd::{NARROW_LANECOUNT, l2_simd4};
pub use scalar::{l2_scalar, l2_scalar_precise};
pub use wide_simd::{WIDE_LANECOUNT, l2_simd8};
