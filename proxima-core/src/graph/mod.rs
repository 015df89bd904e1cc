//! Complete distance graph over a [`PointStore`] and its global ranking.
//!
//! Edges are generated once per unordered pair `(i, j)` with `i < j`, in
//! lexicographic order, and numbered with that generation sequence. The
//! ranking sorts by `(distance, sequence)`; sequences are unique, so the order
//! is total and every sort (sequential or parallel) produces the same ranking.

use std::{cmp::Ordering, slice};

#[cfg(feature = "cpu")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::ProximaError,
    point::{Point, PointStore},
};

/// A candidate connection between two points.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    distance: u64,
    sequence: u64,
}

impl Edge {
    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the squared Euclidean distance between the endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> u64 { self.distance }

    /// Returns the position at which the edge was generated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Number of unordered pairs over `points` elements, or `None` on overflow.
///
/// # Examples
/// ```
/// use proxima_core::edge_count;
///
/// assert_eq!(edge_count(0), Some(0));
/// assert_eq!(edge_count(1), Some(0));
/// assert_eq!(edge_count(4), Some(6));
/// assert_eq!(edge_count(usize::MAX), None);
/// ```
#[must_use]
pub const fn edge_count(points: usize) -> Option<usize> {
    let pred = points.saturating_sub(1);
    // Halve whichever factor is even so the product is exact.
    if points % 2 == 0 {
        (points / 2).checked_mul(pred)
    } else {
        points.checked_mul(pred / 2)
    }
}

/// Generates every edge of the complete graph over `store` in generation
/// order.
///
/// # Errors
/// Returns [`ProximaError::EdgeCountOverflow`] when the edge count does not
/// fit in `usize`.
///
/// # Examples
/// ```
/// use proxima_core::{Point, PointStore, pair_edges};
///
/// let store = PointStore::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(3, 0, 0),
/// ]);
/// let edges = pair_edges(&store)?;
/// let pairs: Vec<_> = edges.iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 2)]);
/// assert_eq!(edges[1].distance(), 9);
/// # Ok::<(), proxima_core::ProximaError>(())
/// ```
pub fn pair_edges(store: &PointStore) -> Result<Vec<Edge>> {
    let count = checked_edge_count(store)?;
    let points = store.points();
    let mut edges = Vec::with_capacity(count);
    for (source, &left) in points.iter().enumerate() {
        edges.extend(row_edges(points, source, left));
    }
    number_in_generation_order(&mut edges);
    Ok(edges)
}

#[cfg(feature = "cpu")]
fn par_pair_edges(store: &PointStore) -> Result<Vec<Edge>> {
    checked_edge_count(store)?;
    let points = store.points();
    // Indexed rows collect in row order, so generation order is preserved.
    let mut edges: Vec<Edge> = points
        .par_iter()
        .enumerate()
        .flat_map_iter(|(source, &left)| row_edges(points, source, left))
        .collect();
    number_in_generation_order(&mut edges);
    Ok(edges)
}

fn checked_edge_count(store: &PointStore) -> Result<usize> {
    edge_count(store.len()).ok_or(ProximaError::EdgeCountOverflow {
        points: store.len(),
    })
}

fn row_edges(points: &[Point], source: usize, left: Point) -> impl Iterator<Item = Edge> + '_ {
    points
        .iter()
        .enumerate()
        .skip(source.saturating_add(1))
        .map(move |(target, &right)| Edge {
            source,
            target,
            distance: left.squared_distance(right),
            sequence: 0,
        })
}

fn number_in_generation_order(edges: &mut [Edge]) {
    for (sequence, edge) in (0u64..).zip(edges.iter_mut()) {
        edge.sequence = sequence;
    }
}

/// All edges of the complete graph, ascending by `(distance, sequence)`.
///
/// Built once and shared read-only by every analysis.
///
/// # Examples
/// ```
/// use proxima_core::{EdgeRanking, Point, PointStore};
///
/// let store = PointStore::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(3, 0, 0),
/// ]);
/// let ranking = EdgeRanking::build(&store)?;
/// let ranked: Vec<_> = ranking.iter().map(|edge| (edge.endpoints(), edge.distance())).collect();
/// assert_eq!(ranked, [((0, 1), 1), ((1, 2), 4), ((0, 2), 9)]);
/// # Ok::<(), proxima_core::ProximaError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeRanking {
    point_count: usize,
    edges: Vec<Edge>,
}

impl EdgeRanking {
    /// Builds the ranking on the current thread.
    ///
    /// # Errors
    /// Returns [`ProximaError::EdgeCountOverflow`] when the store is too large
    /// to enumerate its pairs.
    pub fn build(store: &PointStore) -> Result<Self> {
        let mut edges = pair_edges(store)?;
        edges.sort_unstable();
        Ok(Self::from_sorted(store.len(), edges))
    }

    /// Builds the ranking with edge generation and sorting spread over the
    /// rayon pool. The result is identical to [`EdgeRanking::build`].
    ///
    /// # Errors
    /// Returns [`ProximaError::EdgeCountOverflow`] when the store is too large
    /// to enumerate its pairs.
    #[cfg(feature = "cpu")]
    #[cfg_attr(docsrs, doc(cfg(feature = "cpu")))]
    pub fn par_build(store: &PointStore) -> Result<Self> {
        let mut edges = par_pair_edges(store)?;
        edges.par_sort_unstable();
        Ok(Self::from_sorted(store.len(), edges))
    }

    #[instrument(
        name = "core.rank_edges",
        level = "debug",
        err,
        skip(store),
        fields(points = store.len()),
    )]
    pub(crate) fn build_with(store: &PointStore, parallel: bool) -> Result<Self> {
        #[cfg(feature = "cpu")]
        let ranking = if parallel {
            Self::par_build(store)?
        } else {
            Self::build(store)?
        };
        #[cfg(not(feature = "cpu"))]
        let ranking = {
            debug_assert!(!parallel, "parallel ranking requires the cpu feature");
            Self::build(store)?
        };

        debug!(edges = ranking.len(), "edge ranking built");
        Ok(ranking)
    }

    fn from_sorted(point_count: usize, edges: Vec<Edge>) -> Self {
        #[cfg(feature = "metrics")]
        metrics::counter!("proxima_edges_ranked_total").increment(edges.len() as u64);
        Self { point_count, edges }
    }

    /// Number of points the ranking was built over.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of ranked edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges (fewer than two points).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Ranked edges, nearest first.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over the ranked edges, nearest first.
    pub fn iter(&self) -> slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeRanking {
    type Item = &'a Edge;
    type IntoIter = slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
