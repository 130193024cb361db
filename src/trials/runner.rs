use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::numerics::DistanceFn;

/// Constant added to every element of the first vector before each trial.
pub const DEFAULT_OFFSET: f32 = 1.0;

/// Outcome of one [`run_trials`] call: one distance per repetition, in
/// repetition order, plus the wall-clock time spent producing them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub results: Vec<f64>,
    pub elapsed: Duration,
}

impl TrialRecord {
    pub fn first_result(&self) -> Option<f64> {
        self.results.first().copied()
    }

    pub fn rounds(&self) -> usize {
        self.results.len()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `kernel` `rounds` times and times the whole loop.
///
/// Before every repetition the working copy is rebuilt as `v1[i] + offset`
/// from the untouched base, so the perturbation never stacks up across
/// trials. Repetitions run in index order. The first result is printed to
/// stdout once the clock has stopped.
///
/// `rounds == 0` returns an empty record and prints nothing.
///
/// # Panics
///
/// Panics if the two vectors have different lengths
pub fn run_trials(
    rounds: usize,
    kernel: DistanceFn,
    v1: &[f32],
    v2: &[f32],
    offset: f32,
) -> TrialRecord {
    assert_eq!(v1.len(), v2.len());

    let mut results = Vec::with_capacity(rounds);
    let mut perturbed = vec![0.0f32; v1.len()];

    let start_time = Instant::now();
    for _ in 0..rounds {
        for (dst, &src) in perturbed.iter_mut().zip(v1) {
            *dst = src + offset;
        }
        results.push(black_box(kernel(black_box(perturbed.as_slice()), black_box(v2))));
    }
    let elapsed = start_time.elapsed();

    let record = TrialRecord { results, elapsed };
    if let Some(first) = record.first_result() {
        println!("first distance: {first:.6}");
    }
    debug!(
        rounds = record.rounds(),
        elapsed_secs = record.elapsed_secs(),
        "trials finished"
    );
    record
}
