//! Benchmark support crate for proxima.
//!
//! Provides seeded synthetic point clouds and parameter types used by the
//! Criterion benchmarks for edge ranking and the two connectivity analyses.

pub mod error;
pub mod params;
pub mod source;
