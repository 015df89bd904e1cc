//! Support library for the proxima CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive an analysis without spawning a process.

pub mod cli;
pub mod logging;
