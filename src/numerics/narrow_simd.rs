use std::simd::{Simd, num::SimdFloat, simd_swizzle};

pub const NARROW_LANECOUNT: usize = 4;

type SimdF32x4 = Simd<f32, NARROW_LANECOUNT>;
type SimdF64x2 = Simd<f64, 2>;

/// # Usage
/// Computes the L2 distance between two vectors, 4 lanes at a time, widening
/// every lane to `f64` before squaring.
///
/// Each block of 4 is subtracted in `f32`, converted to 4 `f64` lanes, squared,
/// and its low and high halves are folded into a 2-lane `f64` accumulator.
/// The 0..=3 trailing elements go through the same widen-square-accumulate
/// path one at a time. Accuracy matches [`super::l2_scalar_precise`] while
/// doing 4 subtractions per step.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
pub fn l2_simd4(v1: &[f32], v2: &[f32]) -> f64 {
    assert_eq!(v1.len(), v2.len());

    let mut acc = SimdF64x2::splat(0.0);

    // as_chunks never yields a block when len < 4, the whole input is then tail.
    let (blocks_1, tail_1) = v1.as_chunks::<NARROW_LANECOUNT>();
    let (blocks_2, tail_2) = v2.as_chunks::<NARROW_LANECOUNT>();

    for (&a, &b) in blocks_1.iter().zip(blocks_2) {
        let diff = (SimdF32x4::from_array(a) - SimdF32x4::from_array(b)).cast::<f64>();
        let squared = diff * diff;
        acc += simd_swizzle!(squared, [0, 1]) + simd_swizzle!(squared, [2, 3]);
    }

    for (&a, &b) in tail_1.iter().zip(tail_2) {
        let diff = (a - b) as f64;
        acc += SimdF64x2::from_array([diff * diff, 0.0]);
    }

    acc.reduce_sum().sqrt() // 2-to-1 sum
}
