//! Per-kernel summaries of a timing run.
//!
//! This module turns a [`crate::trials::TrialRecord`] into a report with the
//! kernel's label and declared precision, its throughput, and how far its
//! first distance strays from the precise reference on the same inputs.

mod stats;
pub use stats::*;
