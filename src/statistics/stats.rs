use serde::Serialize;

use crate::{
    numerics::{Kernel, Precision},
    trials::TrialRecord,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelReport {
    pub label: &'static str,
    pub precision: Precision,
    pub vector_size: usize,
    pub rounds: usize,
    pub first_distance: Option<f64>,
    pub elapsed_secs: f64,
    pub elements_per_sec: f64,
    pub relative_deviation: Option<f64>,
}

impl KernelReport {
    /// Summarize `record`, produced by `kernel` over vectors of `vector_size`
    /// elements. `reference` is the precise distance for the first trial's
    /// inputs, if one was computed.
    pub fn new(
        kernel: Kernel,
        vector_size: usize,
        record: &TrialRecord,
        reference: Option<f64>,
    ) -> Self {
        let first_distance = record.first_result();
        let elapsed_secs = record.elapsed_secs();
        let processed = (vector_size * record.rounds()) as f64;
        let elements_per_sec = if elapsed_secs > 0.0 {
            processed / elapsed_secs
        } else {
            0.0
        };

        KernelReport {
            label: kernel.label(),
            precision: kernel.precision(),
            vector_size,
            rounds: record.rounds(),
            first_distance,
            elapsed_secs,
            elements_per_sec,
            relative_deviation: first_distance
                .zip(reference)
                .map(|(d, r)| relative_deviation(d, r)),
        }
    }

    /// Whether the deviation from the reference is within what the kernel's
    /// declared precision allows. Reports without a reference pass.
    pub fn within_tolerance(&self) -> bool {
        self.relative_deviation
            .is_none_or(|dev| dev <= self.precision.tolerance())
    }
}

fn relative_deviation(actual: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        actual.abs()
    } else {
        ((actual - reference) / reference).abs()
    }
}
