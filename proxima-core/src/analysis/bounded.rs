//! Bounded-edge clustering: spend a fixed budget of ranked edges.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{graph::EdgeRanking, union_find::DisjointSetForest};

/// Outcome of [`bounded_clustering`].
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use proxima_core::{EdgeRanking, Point, PointStore, bounded_clustering};
///
/// let store = PointStore::new(vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 0, 0),
///     Point::new(2, 0, 0),
/// ]);
/// let ranking = EdgeRanking::build(&store)?;
/// let three = NonZeroUsize::new(3).expect("three is non-zero");
/// let summary = bounded_clustering(&ranking, 1, three);
/// assert_eq!(summary.component_sizes(), [2, 1]);
/// assert_eq!(summary.product(), Some(2));
/// # Ok::<(), proxima_core::ProximaError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundedClustering {
    edges_consumed: usize,
    merges: usize,
    component_sizes: Vec<usize>,
    largest: NonZeroUsize,
    product: Option<u64>,
}

impl BoundedClustering {
    /// Edges taken from the ranking, redundant ones included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_consumed(&self) -> usize { self.edges_consumed }

    /// Edges that actually joined two components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Every component size, largest first.
    #[must_use]
    pub fn component_sizes(&self) -> &[usize] {
        &self.component_sizes
    }

    /// The sizes that contribute to [`BoundedClustering::product`].
    #[must_use]
    pub fn largest_sizes(&self) -> &[usize] {
        let take = self.largest.get().min(self.component_sizes.len());
        self.component_sizes.get(..take).unwrap_or_default()
    }

    /// Number of components left after the budget was spent.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_sizes.len()
    }

    /// Product of the largest component sizes, or `None` when there are no
    /// components at all. The product saturates at `u64::MAX`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn product(&self) -> Option<u64> { self.product }
}

/// Applies `union` to the first `edge_budget` ranked edges of a fresh forest
/// and multiplies the `largest` biggest component sizes.
///
/// Every edge counts against the budget even when its endpoints already share
/// a component. Budgets beyond the ranking are clamped to its length. With
/// fewer than `largest` components the product covers those that exist.
#[instrument(
    name = "core.bounded_clustering",
    level = "debug",
    skip(ranking),
    fields(points = ranking.point_count(), edges = ranking.len()),
)]
#[must_use]
pub fn bounded_clustering(
    ranking: &EdgeRanking,
    edge_budget: usize,
    largest: NonZeroUsize,
) -> BoundedClustering {
    let mut forest = DisjointSetForest::new(ranking.point_count());
    let consumed = &ranking.edges()[..edge_budget.min(ranking.len())];

    let merges = consumed
        .iter()
        .filter(|edge| forest.union(edge.source(), edge.target()))
        .count();

    let mut component_sizes = forest.component_sizes();
    component_sizes.sort_unstable_by(|left, right| right.cmp(left));

    let product = (!component_sizes.is_empty()).then(|| {
        component_sizes
            .iter()
            .take(largest.get())
            .fold(1_u64, |acc, &size| acc.saturating_mul(size as u64))
    });

    #[cfg(feature = "metrics")]
    metrics::counter!("proxima_unions_merged_total", "policy" => "bounded").increment(merges as u64);

    debug!(
        consumed = consumed.len(),
        merges,
        components = component_sizes.len(),
        product = ?product,
        "edge budget spent"
    );

    BoundedClustering {
        edges_consumed: consumed.len(),
        merges,
        component_sizes,
        largest,
        product,
    }
}
