//! Proxima core library.
//!
//! Ranks every pair of 3-D integer points by squared distance and answers two
//! connectivity questions over that ranking with a disjoint-set forest: the
//! product of the largest component sizes after a fixed budget of edges, and
//! the edge that first joins everything into one component.
//!
//! When the `metrics` feature is enabled the analyses emit:
//!
//! - `proxima_edges_ranked_total` (counter)
//! - `proxima_unions_merged_total` (counter, labelled by `policy`)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod builder;
mod datasource;
mod error;
mod graph;
mod point;
mod proxima;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::{
        AxisProduct, BoundedClustering, ClosingEdgeCombiner, ClosingSummary, bounded_clustering,
        closing_edge,
    },
    builder::{DEFAULT_EDGE_BUDGET, DEFAULT_LARGEST_COMPONENTS, ExecutionStrategy, ProximaBuilder},
    datasource::PointSource,
    error::{PointSourceError, PointSourceErrorCode, ProximaError, ProximaErrorCode, Result},
    graph::{Edge, EdgeRanking, edge_count, pair_edges},
    point::{Axis, Point, PointStore},
    proxima::{ConnectivityReport, Proxima},
    union_find::DisjointSetForest,
};
