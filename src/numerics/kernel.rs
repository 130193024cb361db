use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::numerics::{l2_scalar, l2_scalar_precise, l2_simd4, l2_simd8};

/// Signature shared by every distance kernel. The two slices must have the
/// same length.
pub type DistanceFn = fn(&[f32], &[f32]) -> f64;

/// Width of the running sum a kernel accumulates squared differences into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    /// Relative error against [`Kernel::ScalarPrecise`] a kernel of this
    /// precision is expected to stay under on well-conditioned inputs.
    pub fn tolerance(&self) -> f64 {
        match self {
            Precision::Single => 1e-4,
            Precision::Double => 1e-6,
        }
    }
}

/// One of the competing Euclidean distance strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    Scalar,
    ScalarPrecise,
    Simd4,
    Simd8,
}

impl Kernel {
    /// Every kernel, in reporting order.
    pub const ALL: [Kernel; 4] = [
        Kernel::Scalar,
        Kernel::ScalarPrecise,
        Kernel::Simd4,
        Kernel::Simd8,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            Kernel::ScalarPrecise => "scalar-precise",
            Kernel::Simd4 => "simd4",
            Kernel::Simd8 => "simd8",
        }
    }

    /// Human readable label used in the timing report.
    pub fn label(&self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            Kernel::ScalarPrecise => "scalar precise",
            Kernel::Simd4 => "simd x4 (f64)",
            Kernel::Simd8 => "simd x8 (f32)",
        }
    }

    /// The scalar kernel squares in `f32` but sums in `f64`, which still
    /// makes its accumulator double width.
    pub fn precision(&self) -> Precision {
        match self {
            Kernel::Scalar | Kernel::ScalarPrecise | Kernel::Simd4 => Precision::Double,
            Kernel::Simd8 => Precision::Single,
        }
    }

    pub fn as_fn(&self) -> DistanceFn {
        match self {
            Kernel::Scalar => l2_scalar,
            Kernel::ScalarPrecise => l2_scalar_precise,
            Kernel::Simd4 => l2_simd4,
            Kernel::Simd8 => l2_simd8,
        }
    }

    #[inline]
    pub fn distance(&self, v1: &[f32], v2: &[f32]) -> f64 {
        (self.as_fn())(v1, v2)
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kernel::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Kernel::ALL.iter().map(Kernel::name).collect();
                format!("unknown kernel '{s}', expected one of {}", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const TAIL_SIZES: [usize; 14] = [1, 2, 3, 4, 5, 7, 8, 9, 11, 12, 13, 15, 16, 17];

    fn relative_error(actual: f64, expected: f64) -> f64 {
        if expected == 0.0 {
            actual.abs()
        } else {
            ((actual - expected) / expected).abs()
        }
    }

    fn random_vector(rng: &mut StdRng, n: usize) -> Vec<f32> {
        (0..n).map(|_| rng.random_range(-100.0..100.0)).collect()
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kernel in Kernel::ALL {
            assert_eq!(kernel.name().parse::<Kernel>(), Ok(kernel));
            assert_eq!(kernel.to_string(), kernel.name());
        }
    }

    #[test]
    fn unknown_name_lists_the_valid_ones() {
        let err = "avx512".parse::<Kernel>().unwrap_err();
        assert!(err.contains("avx512"));
        assert!(err.contains("scalar-precise"));
        assert!(err.contains("simd8"));
    }

    #[test]
    fn only_the_wide_kernel_is_single_precision() {
        assert_eq!(Kernel::Simd8.precision(), Precision::Single);
        for kernel in [Kernel::Scalar, Kernel::ScalarPrecise, Kernel::Simd4] {
            assert_eq!(kernel.precision(), Precision::Double);
        }
        assert!(Precision::Single.tolerance() > Precision::Double.tolerance());
    }

    #[test]
    fn as_fn_dispatches_to_the_named_kernel() {
        // 4097² loses a bit when squared in f32, telling the kernels apart
        let x = [4097.0, 0.0, 0.0, 0.0];
        let y = [0.0; 4];
        assert_eq!(Kernel::ScalarPrecise.distance(&x, &y), l2_scalar_precise(&x, &y));
        assert_eq!(Kernel::Scalar.distance(&x, &y), l2_scalar(&x, &y));
        assert_eq!(Kernel::Simd4.distance(&x, &y), l2_simd4(&x, &y));
        assert_eq!(Kernel::Simd8.distance(&x, &y), l2_simd8(&x, &y));
        assert_ne!(Kernel::Scalar.distance(&x, &y), Kernel::ScalarPrecise.distance(&x, &y));
    }

    #[test]
    fn empty_vectors_have_zero_distance() {
        for kernel in Kernel::ALL {
            assert_eq!(kernel.distance(&[], &[]), 0.0, "{kernel}");
        }
    }

    #[test]
    fn identical_vectors_have_zero_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 3, 4, 8, 9, 100, 1023] {
            let x = random_vector(&mut rng, n);
            for kernel in Kernel::ALL {
                assert_eq!(kernel.distance(&x, &x), 0.0, "{kernel} n={n}");
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [1, 5, 12, 17, 257] {
            let x = random_vector(&mut rng, n);
            let y = random_vector(&mut rng, n);
            for kernel in Kernel::ALL {
                assert_eq!(kernel.distance(&x, &y), kernel.distance(&y, &x), "{kernel} n={n}");
            }
        }
    }

    #[test]
    fn kernels_agree_with_scalar_baseline() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..=1024 {
            let x = random_vector(&mut rng, n);
            let y = random_vector(&mut rng, n);
            let baseline = l2_scalar(&x, &y);
            for kernel in Kernel::ALL {
                let d = kernel.distance(&x, &y);
                assert!(
                    relative_error(d, baseline) < 1e-4,
                    "{kernel} n={n}: {d} vs baseline {baseline}"
                );
            }
        }
    }

    #[test]
    fn every_element_is_counted_exactly_once() {
        // element i contributes (i + 1)², so any lost or doubled element shifts the sum
        for n in TAIL_SIZES {
            let x: Vec<f32> = (1..=n).map(|i| i as f32).collect();
            let y = vec![0.0; n];
            let expected: f64 = (1..=n).map(|i| (i * i) as f64).sum();
            for kernel in Kernel::ALL {
                let d = kernel.distance(&x, &y);
                assert!(
                    relative_error(d * d, expected) < 1e-6,
                    "{kernel} n={n}: got {} expected {expected}",
                    d * d
                );
            }
        }
    }

    #[test]
    fn ramp_against_zeros() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0; 4];
        for kernel in Kernel::ALL {
            let d = kernel.distance(&x, &y);
            assert!(relative_error(d, 14.0f64.sqrt()) < 1e-6, "{kernel}: {d}");
        }
    }

    #[test]
    fn one_full_wide_block() {
        let x = [1.0; 8];
        let y = [0.0; 8];
        for kernel in Kernel::ALL {
            let d = kernel.distance(&x, &y);
            assert!(relative_error(d, 8.0f64.sqrt()) < 1e-6, "{kernel}: {d}");
        }
    }

    #[test]
    fn wide_block_plus_one_trailing_element() {
        let x = [1.0; 9];
        let y = [0.0; 9];
        for kernel in Kernel::ALL {
            assert_eq!(kernel.distance(&x, &y), 3.0, "{kernel}");
        }
    }

    #[test]
    fn single_precision_drift_stays_bounded() {
        // long, large-magnitude input where f32 accumulation drifts
        let mut rng = StdRng::seed_from_u64(3);
        let n = 1 << 14;
        let x: Vec<f32> = (0..n).map(|_| rng.random_range(0.0..10_000.0)).collect();
        let y: Vec<f32> = (0..n).map(|_| rng.random_range(-10_000.0..0.0)).collect();

        let reference = l2_scalar_precise(&x, &y);
        let simd4 = l2_simd4(&x, &y);
        let simd8 = l2_simd8(&x, &y);

        assert!(relative_error(simd4, reference) < Precision::Double.tolerance());
        assert!(relative_error(simd8, reference) < Precision::Single.tolerance());
    }
}
