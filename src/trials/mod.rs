//! Repeated, timed invocations of a distance kernel.
//!
//! Each trial runs the kernel on a freshly perturbed copy of the first input
//! so that successive calls cannot be folded into one by the optimizer.

mod runner;
pub use runner::*;
