//! Connectivity orchestration for the Proxima library.
//!
//! Provides the [`Proxima`] entry point, which loads points, ranks the
//! complete edge set once and runs both connectivity analyses over it.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    analysis::{
        BoundedClustering, ClosingEdgeCombiner, ClosingSummary, bounded_clustering, closing_edge,
    },
    builder::ExecutionStrategy,
    datasource::PointSource,
    error::ProximaError,
    graph::{Edge, EdgeRanking},
    point::{Point, PointStore},
};

/// Entry point for running both connectivity analyses.
///
/// # Examples
/// ```
/// use proxima_core::{AxisProduct, Point, PointStore, ProximaBuilder};
///
/// let store = PointStore::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(3, 0, 0),
/// ]);
/// let proxima = ProximaBuilder::new().with_edge_budget(1).build()?;
/// let report = proxima.run(&store)?;
/// assert_eq!(report.bounded().product(), Some(2));
/// assert_eq!(report.closing_value(&AxisProduct::default()), Some(3));
/// # Ok::<(), proxima_core::ProximaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Proxima {
    edge_budget: usize,
    largest_components: NonZeroUsize,
    execution_strategy: ExecutionStrategy,
}

impl Proxima {
    pub(crate) const fn new(
        edge_budget: usize,
        largest_components: NonZeroUsize,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            edge_budget,
            largest_components,
            execution_strategy,
        }
    }

    /// Returns the edge budget of the bounded clustering.
    #[must_use]
    pub const fn edge_budget(&self) -> usize {
        self.edge_budget
    }

    /// Returns how many of the largest components are multiplied.
    #[must_use]
    pub const fn largest_components(&self) -> NonZeroUsize {
        self.largest_components
    }

    /// Returns the execution strategy used for ranking.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Loads every point from `source` and analyses them.
    ///
    /// # Errors
    /// Returns [`ProximaError::PointSource`] when the source fails to yield a
    /// point, plus any error from [`Proxima::analyze`].
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            points = source.len(),
            edge_budget = self.edge_budget,
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run<S: PointSource + ?Sized>(&self, source: &S) -> Result<ConnectivityReport> {
        let store = PointStore::from_source(source).map_err(|error| ProximaError::PointSource {
            data_source: Arc::from(source.name()),
            error,
        })?;
        self.analyze(&store)
    }

    /// Ranks the complete edge set of `store` and runs both analyses on
    /// separate forests.
    ///
    /// Inputs with fewer than two points are not errors; they produce the
    /// neutral results described on [`ConnectivityReport`].
    ///
    /// # Errors
    /// Returns [`ProximaError::EdgeCountOverflow`] when the store has too many
    /// points to enumerate their pairs.
    #[instrument(
        name = "core.analyze",
        err,
        skip(self, store),
        fields(points = store.len(), edge_budget = self.edge_budget),
    )]
    pub fn analyze(&self, store: &PointStore) -> Result<ConnectivityReport> {
        if store.len() < 2 {
            warn!(
                points = store.len(),
                "fewer than two points, reporting degenerate results"
            );
        }

        let parallel = self.execution_strategy.resolve_parallel()?;
        let ranking = EdgeRanking::build_with(store, parallel)?;

        let bounded = bounded_clustering(&ranking, self.edge_budget, self.largest_components);
        let closing = closing_edge(&ranking);
        let closing_points = closing
            .closing_edge()
            .and_then(|edge| endpoint_points(store, edge));

        info!(
            edges = ranking.len(),
            product = ?bounded.product(),
            closing = ?closing.closing_edge().map(|edge| edge.endpoints()),
            "connectivity analysis completed"
        );

        Ok(ConnectivityReport {
            point_count: store.len(),
            edge_count: ranking.len(),
            bounded,
            closing,
            closing_points,
        })
    }
}

fn endpoint_points(store: &PointStore, edge: Edge) -> Option<(Point, Point)> {
    Some((store.get(edge.source())?, store.get(edge.target())?))
}

/// Results of both connectivity analyses over one point set.
///
/// With no points the bounded product is `None`; with a single point it is
/// `Some(1)` over one component. Fewer than two points never have a closing
/// edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityReport {
    point_count: usize,
    edge_count: usize,
    bounded: BoundedClustering,
    closing: ClosingSummary,
    closing_points: Option<(Point, Point)>,
}

impl ConnectivityReport {
    /// Number of analysed points.
    #[must_use]
    #[rustfmt::skip]
    pub const fn point_count(&self) -> usize { self.point_count }

    /// Number of ranked edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Result of the bounded-edge clustering.
    #[must_use]
    #[rustfmt::skip]
    pub const fn bounded(&self) -> &BoundedClustering { &self.bounded }

    /// Result of the closing-edge search.
    #[must_use]
    #[rustfmt::skip]
    pub const fn closing(&self) -> &ClosingSummary { &self.closing }

    /// The points joined by the closing edge, source first.
    #[must_use]
    #[rustfmt::skip]
    pub const fn closing_points(&self) -> Option<(Point, Point)> { self.closing_points }

    /// Applies `combiner` to the closing edge's endpoints, or returns `None`
    /// when no closing edge exists.
    #[must_use]
    pub fn closing_value<C: ClosingEdgeCombiner + ?Sized>(&self, combiner: &C) -> Option<i64> {
        self.closing_points
            .map(|(source, target)| combiner.combine(source, target))
    }
}
