//! Benchmark parameter types.

use std::fmt;

/// Parameters for a ranking benchmark run.
#[derive(Clone, Debug)]
pub struct RankingBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
}

impl fmt::Display for RankingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a bounded clustering benchmark run.
#[derive(Clone, Debug)]
pub struct BoundedBenchParams {
    /// Number of points in the cloud.
    pub point_count: usize,
    /// Ranked edges consumed.
    pub edge_budget: usize,
}

impl fmt::Display for BoundedBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.edge_budget)
    }
}
