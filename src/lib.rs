#![feature(portable_simd)]

pub mod inputs;
pub mod numerics;
pub mod statistics;
pub mod trials;
