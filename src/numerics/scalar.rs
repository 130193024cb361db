/// # Usage
/// Computes the L2 distance between two vectors, one element at a time:
///
/// ```text
/// L2(x, y) = sqrt(Σ_i (x[i] - y[i]) ** 2)
/// ```
///
/// The difference and its square are computed in `f32`, and only the square
/// is widened before being added to the `f64` running sum. This is the
/// baseline every other kernel is compared against for speed.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
pub fn l2_scalar(v1: &[f32], v2: &[f32]) -> f64 {
    assert_eq!(v1.len(), v2.len());

    let mut sum = 0.0f64;
    for (&a, &b) in v1.iter().zip(v2) {
        let dist = a - b;
        sum += (dist * dist) as f64;
    }
    sum.sqrt()
}

/// # Usage
/// Same as [`l2_scalar`], but the difference is widened to `f64` *before*
/// squaring. Squaring a large `f32` difference loses bits that this version
/// keeps, so it is the accuracy reference for the SIMD kernels.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
#[inline]
pub fn l2_scalar_precise(v1: &[f32], v2: &[f32]) -> f64 {
    assert_eq!(v1.len(), v2.len());

    let mut sum = 0.0f64;
    for (&a, &b) in v1.iter().zip(v2) {
        let dist = (a - b) as f64;
        sum += dist * dist;
    }
    sum.sqrt()
}
