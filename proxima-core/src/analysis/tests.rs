//! Scenario and property tests for both connectivity policies.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::{
    graph::EdgeRanking,
    point::{Axis, Point, PointStore},
    test_utils::{point_store_strategy, suite_proptest_config},
    union_find::DisjointSetForest,
};

use super::{AxisProduct, ClosingEdgeCombiner, bounded_clustering, closing_edge};

const THREE: NonZeroUsize = NonZeroUsize::new(3).expect("three is non-zero");

fn ranking(points: &[(i64, i64, i64)]) -> EdgeRanking {
    let store: PointStore = points.iter().copied().map(Point::from).collect();
    EdgeRanking::build(&store).expect("ranking must build")
}

#[fixture]
fn unit_square() -> EdgeRanking {
    ranking(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)])
}

#[test]
fn budget_of_one_on_a_line_leaves_a_pair_and_a_singleton() {
    let line = ranking(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
    let summary = bounded_clustering(&line, 1, THREE);

    assert_eq!(summary.component_sizes(), [2, 1]);
    assert_eq!(summary.largest_sizes(), [2, 1]);
    assert_eq!(summary.product(), Some(2));
    assert_eq!(summary.edges_consumed(), 1);
    assert_eq!(summary.merges(), 1);
}

#[test]
fn separated_pairs_multiply_both_components() {
    let pairs = ranking(&[(0, 0, 0), (1, 0, 0), (100, 0, 0), (101, 0, 0)]);
    let summary = bounded_clustering(&pairs, 2, THREE);

    assert_eq!(summary.component_sizes(), [2, 2]);
    assert_eq!(summary.component_count(), 2);
    assert_eq!(summary.product(), Some(4));
}

#[test]
fn closing_edge_on_uneven_line_is_the_second_union() {
    let line = ranking(&[(0, 0, 0), (1, 0, 0), (3, 0, 0)]);
    let ranked: Vec<_> = line
        .iter()
        .map(|edge| (edge.endpoints(), edge.distance()))
        .collect();
    assert_eq!(ranked, [((0, 1), 1), ((1, 2), 4), ((0, 2), 9)]);

    let summary = closing_edge(&line);
    let closing = summary.closing_edge().expect("line must connect");
    assert_eq!(closing.endpoints(), (1, 2));
    assert_eq!(summary.edges_examined(), 2);
    assert_eq!(summary.merges(), 2);
    assert_eq!(summary.components_remaining(), 1);
}

#[rstest]
#[case::empty(&[], None, 0)]
#[case::single(&[(7, -2, 5)], Some(1), 1)]
fn degenerate_inputs_report_neutral_results(
    #[case] points: &[(i64, i64, i64)],
    #[case] product: Option<u64>,
    #[case] components: usize,
) {
    let degenerate = ranking(points);

    let bounded = bounded_clustering(&degenerate, 1_000, THREE);
    assert_eq!(bounded.product(), product);
    assert_eq!(bounded.component_count(), components);
    assert_eq!(bounded.edges_consumed(), 0);

    let closing = closing_edge(&degenerate);
    assert_eq!(closing.closing_edge(), None);
    assert_eq!(closing.edges_examined(), 0);
    assert_eq!(closing.components_remaining(), components);
}

#[rstest]
fn redundant_edges_still_spend_the_budget(unit_square: EdgeRanking) {
    // Ranked: (0,1) (0,2) (1,3) (2,3) at distance 1, then both diagonals.
    let summary = bounded_clustering(&unit_square, 4, THREE);
    assert_eq!(summary.edges_consumed(), 4);
    assert_eq!(summary.merges(), 3);
    assert_eq!(summary.component_sizes(), [4]);
    assert_eq!(summary.product(), Some(4));
}

#[rstest]
#[case(0, &[1, 1, 1, 1], 1)]
#[case(1, &[2, 1, 1], 2)]
#[case(2, &[3, 1], 3)]
#[case(3, &[4], 4)]
#[case(usize::MAX, &[4], 4)]
fn equidistant_edges_are_spent_in_generation_order(
    unit_square: EdgeRanking,
    #[case] budget: usize,
    #[case] sizes: &[usize],
    #[case] product: u64,
) {
    let summary = bounded_clustering(&unit_square, budget, THREE);
    assert_eq!(summary.component_sizes(), sizes);
    assert_eq!(summary.product(), Some(product));
    assert_eq!(summary.edges_consumed(), budget.min(unit_square.len()));
}

#[rstest]
fn closing_edge_under_ties_follows_generation_order(unit_square: EdgeRanking) {
    for _ in 0..10 {
        let summary = closing_edge(&unit_square);
        let closing = summary.closing_edge().expect("square must connect");
        assert_eq!(closing.endpoints(), (1, 3));
        assert_eq!(summary.edges_examined(), 3);
    }
}

#[test]
fn largest_limits_the_number_of_factors() {
    let clusters = ranking(&[
        (0, 0, 0),
        (1, 0, 0),
        (2, 0, 0),
        (50, 0, 0),
        (51, 0, 0),
        (100, 0, 0),
    ]);
    let one = NonZeroUsize::MIN;
    let summary = bounded_clustering(&clusters, 3, one);
    assert_eq!(summary.component_sizes(), [3, 2, 1]);
    assert_eq!(summary.largest_sizes(), [3]);
    assert_eq!(summary.product(), Some(3));

    let summary = bounded_clustering(&clusters, 3, THREE);
    assert_eq!(summary.product(), Some(6));
}

#[rstest]
#[case(Axis::X, 217 * 3)]
#[case(Axis::Y, -4 * 8)]
#[case(Axis::Z, 0)]
fn axis_product_combines_closing_endpoints(#[case] axis: Axis, #[case] expected: i64) {
    let source = Point::new(217, -4, 0);
    let target = Point::new(3, 8, 12);
    assert_eq!(AxisProduct(axis).combine(source, target), expected);
}

#[test]
fn axis_product_saturates() {
    let big = Point::new(i64::MAX, i64::MIN, 0);
    assert_eq!(AxisProduct(Axis::X).combine(big, big), i64::MAX);
    assert_eq!(AxisProduct(Axis::Y).combine(big, Point::new(0, 2, 0)), i64::MIN);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn component_count_never_increases(store in point_store_strategy(24)) {
        let ranking = EdgeRanking::build(&store).expect("ranking must build");
        let mut forest = DisjointSetForest::new(store.len());
        let mut previous = forest.component_count();
        for edge in &ranking {
            forest.union(edge.source(), edge.target());
            prop_assert!(forest.component_count() <= previous);
            previous = forest.component_count();
        }
    }

    #[test]
    fn closing_edge_exists_exactly_when_two_points_exist(store in point_store_strategy(24)) {
        let ranking = EdgeRanking::build(&store).expect("ranking must build");
        let summary = closing_edge(&ranking);

        prop_assert_eq!(summary.closing_edge().is_some(), store.len() >= 2);
        if summary.closing_edge().is_some() {
            prop_assert_eq!(summary.components_remaining(), 1);
            prop_assert_eq!(summary.merges(), store.len() - 1);
        }
    }

    #[test]
    fn analyses_are_deterministic(store in point_store_strategy(20), budget in 0usize..200) {
        let first = EdgeRanking::build(&store).expect("ranking must build");
        let second = EdgeRanking::build(&store).expect("ranking must build");
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(
            bounded_clustering(&first, budget, THREE),
            bounded_clustering(&second, budget, THREE)
        );
        prop_assert_eq!(closing_edge(&first), closing_edge(&second));
    }

    #[test]
    fn bounded_sizes_partition_the_points(store in point_store_strategy(20), budget in 0usize..200) {
        let ranking = EdgeRanking::build(&store).expect("ranking must build");
        let summary = bounded_clustering(&ranking, budget, THREE);

        prop_assert_eq!(summary.component_sizes().iter().sum::<usize>(), store.len());
        prop_assert!(summary.component_sizes().windows(2).all(|pair| pair[0] >= pair[1]));
        prop_assert_eq!(summary.edges_consumed(), budget.min(ranking.len()));
    }
}
