use std::simd::{Simd, num::SimdFloat, simd_swizzle};

use crate::numerics::narrow_simd::NARROW_LANECOUNT;

pub const WIDE_LANECOUNT: usize = 8;

type SimdF32x8 = Simd<f32, WIDE_LANECOUNT>;
type SimdF32x4 = Simd<f32, NARROW_LANECOUNT>;

/// # Usage
/// Computes the L2 distance between two vectors, 8 lanes at a time, keeping
/// everything in `f32`.
///
/// The input is tiled in three stages, each one starting where the previous
/// one stopped:
///
/// ```text
/// [ 8 | 8 | ... | 8 ][ 4 ][ 1 | 1 | 1 ]
///   f32x8 blocks      f32x4   scalar
/// ```
///
/// The 8-lane accumulator is folded into 4 lanes before the second stage,
/// and the scalar tail lands in lane 0. Nothing is widened, so for long or
/// large-magnitude inputs the result drifts further from
/// [`super::l2_scalar_precise`] than [`super::l2_simd4`] does. Use one of
/// those when the result has to match the precise reference.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
pub fn l2_simd8(v1: &[f32], v2: &[f32]) -> f64 {
    assert_eq!(v1.len(), v2.len());

    let (wide_1, rest_1) = v1.as_chunks::<WIDE_LANECOUNT>();
    let (wide_2, rest_2) = v2.as_chunks::<WIDE_LANECOUNT>();

    let mut wide_acc = SimdF32x8::splat(0.0);
    for (&a, &b) in wide_1.iter().zip(wide_2) {
        let diff = SimdF32x8::from_array(a) - SimdF32x8::from_array(b);
        wide_acc += diff * diff;
    }

    let mut acc: SimdF32x4 =
        simd_swizzle!(wide_acc, [0, 1, 2, 3]) + simd_swizzle!(wide_acc, [4, 5, 6, 7]);

    // at most one narrow block fits in what the wide stage left behind
    let (narrow_1, tail_1) = rest_1.as_chunks::<NARROW_LANECOUNT>();
    let (narrow_2, tail_2) = rest_2.as_chunks::<NARROW_LANECOUNT>();
    for (&a, &b) in narrow_1.iter().zip(narrow_2) {
        let diff = SimdF32x4::from_array(a) - SimdF32x4::from_array(b);
        acc += diff * diff;
    }

    for (&a, &b) in tail_1.iter().zip(tail_2) {
        let diff = a - b;
        acc += SimdF32x4::from_array([diff * diff, 0.0, 0.0, 0.0]);
    }

    acc.reduce_sum().sqrt() as f64 // 4-to-1 sum
}
