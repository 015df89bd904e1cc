//! Closing-edge search: connect ranked edges until one component remains.

use tracing::{debug, instrument};

use crate::{
    graph::{Edge, EdgeRanking},
    point::{Axis, Point},
    union_find::DisjointSetForest,
};

/// Outcome of [`closing_edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClosingSummary {
    closing: Option<Edge>,
    edges_examined: usize,
    merges: usize,
    components_remaining: usize,
}

impl ClosingSummary {
    /// The edge whose merge left a single component, if that happened.
    #[must_use]
    #[rustfmt::skip]
    pub const fn closing_edge(&self) -> Option<Edge> { self.closing }

    /// Ranked edges looked at, including redundant ones.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_examined(&self) -> usize { self.edges_examined }

    /// Edges that joined two components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Components left when the search stopped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components_remaining(&self) -> usize { self.components_remaining }
}

/// Unions ranked edges into a fresh forest until exactly one component is
/// left and reports the edge responsible for that last merge.
///
/// Redundant edges are examined but do not merge anything. When the ranking
/// runs out first, including every input with fewer than two points, there
/// is no closing edge.
///
/// # Examples
/// ```
/// use proxima_core::{EdgeRanking, Point, PointStore, closing_edge};
///
/// let store = PointStore::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(3, 0, 0),
/// ]);
/// let summary = closing_edge(&EdgeRanking::build(&store)?);
/// let closing = summary.closing_edge().expect("three points connect");
/// assert_eq!(closing.endpoints(), (1, 2));
/// assert_eq!(summary.edges_examined(), 2);
/// # Ok::<(), proxima_core::ProximaError>(())
/// ```
#[instrument(
    name = "core.closing_edge",
    level = "debug",
    skip(ranking),
    fields(points = ranking.point_count(), edges = ranking.len()),
)]
#[must_use]
pub fn closing_edge(ranking: &EdgeRanking) -> ClosingSummary {
    let mut forest = DisjointSetForest::new(ranking.point_count());
    let mut summary = ClosingSummary {
        closing: None,
        edges_examined: 0,
        merges: 0,
        components_remaining: forest.component_count(),
    };

    for edge in ranking {
        summary.edges_examined += 1;
        if !forest.union(edge.source(), edge.target()) {
            continue;
        }
        summary.merges += 1;
        if forest.component_count() == 1 {
            summary.closing = Some(*edge);
            break;
        }
    }
    summary.components_remaining = forest.component_count();

    #[cfg(feature = "metrics")]
    metrics::counter!("proxima_unions_merged_total", "policy" => "closing")
        .increment(summary.merges as u64);

    debug!(
        examined = summary.edges_examined,
        merges = summary.merges,
        components = summary.components_remaining,
        closing = ?summary.closing.map(|edge| edge.endpoints()),
        "closing edge search finished"
    );
    summary
}

/// Turns the endpoints of a closing edge into a single reported value.
///
/// Any `Fn(Point, Point) -> i64` closure is a combiner.
///
/// # Examples
/// ```
/// use proxima_core::{AxisProduct, Axis, ClosingEdgeCombiner, Point};
///
/// let (a, b) = (Point::new(-3, 2, 0), Point::new(5, 7, 1));
/// assert_eq!(AxisProduct(Axis::X).combine(a, b), -15);
///
/// let manhattan = |a: Point, b: Point| (a.x() - b.x()).abs() + (a.y() - b.y()).abs();
/// assert_eq!(manhattan.combine(a, b), 13);
/// ```
pub trait ClosingEdgeCombiner {
    /// Combines the source and target endpoints.
    fn combine(&self, source: Point, target: Point) -> i64;
}

impl<F> ClosingEdgeCombiner for F
where
    F: Fn(Point, Point) -> i64,
{
    fn combine(&self, source: Point, target: Point) -> i64 {
        self(source, target)
    }
}

/// Multiplies one coordinate of each endpoint, saturating on overflow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AxisProduct(pub Axis);

impl ClosingEdgeCombiner for AxisProduct {
    fn combine(&self, source: Point, target: Point) -> i64 {
        source
            .coordinate(self.0)
            .saturating_mul(target.coordinate(self.0))
    }
}
