//! Synthetic input vectors for the timing runs.

mod synthetic;
pub use synthetic::*;
