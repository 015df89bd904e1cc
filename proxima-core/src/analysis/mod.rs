//! Connectivity analyses driven over a shared [`crate::EdgeRanking`].
//!
//! Both policies build their own [`crate::DisjointSetForest`]; the ranking is
//! the only state they share and neither mutates it.

mod bounded;
mod closing;

pub use self::{
    bounded::{BoundedClustering, bounded_clustering},
    closing::{AxisProduct, ClosingEdgeCombiner, ClosingSummary, closing_edge},
};

#[cfg(test)]
mod tests;
