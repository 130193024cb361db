use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Builds the deterministic pair `v1[i] = i`, `v2[i] = n - i`.
pub fn ramp_pair(n: usize) -> (Vec<f32>, Vec<f32>) {
    let v1 = (0..n).map(|i| i as f32).collect();
    let v2 = (0..n).map(|i| (n - i) as f32).collect();
    (v1, v2)
}

/// Builds two vectors of `n` standard normal samples, seeded from the given
/// `seed`. This is deterministic.
pub fn gaussian_pair(n: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let v1 = gaussian_vector(n, &mut rng);
    let v2 = gaussian_vector(n, &mut rng);
    (v1, v2)
}

fn gaussian_vector<R: Rng>(n: usize, rng: &mut R) -> Vec<f32> {
    rng.sample_iter(StandardNormal).take(n).collect()
}
