//! Unit tests for edge generation and ranking.

use rstest::rstest;

use crate::point::{Point, PointStore};

use super::{EdgeRanking, edge_count, pair_edges};

fn store(points: &[(i64, i64, i64)]) -> PointStore {
    points.iter().copied().map(Point::from).collect()
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 3)]
#[case(7, 21)]
#[case(1_000, 499_500)]
fn edge_count_matches_pair_formula(#[case] points: usize, #[case] expected: usize) {
    assert_eq!(edge_count(points), Some(expected));
}

#[test]
fn edge_count_does_not_overflow_early() {
    // 2^32 points yield 2^63 - 2^31 edges, which still fits in 64 bits.
    #[cfg(target_pointer_width = "64")]
    assert_eq!(edge_count(1 << 32), Some((1 << 63) - (1 << 31)));
    assert_eq!(edge_count(usize::MAX), None);
}

#[rstest]
#[case::empty(&[])]
#[case::single(&[(4, 4, 4)])]
fn fewer_than_two_points_yield_no_edges(#[case] points: &[(i64, i64, i64)]) {
    let store = store(points);
    assert!(pair_edges(&store).expect("edges must build").is_empty());
    let ranking = EdgeRanking::build(&store).expect("ranking must build");
    assert!(ranking.is_empty());
    assert_eq!(ranking.point_count(), points.len());
}

#[test]
fn pair_edges_follow_lexicographic_generation_order() {
    let store = store(&[(0, 0, 0), (1, 0, 0), (0, 2, 0), (0, 0, 3)]);
    let edges = pair_edges(&store).expect("edges must build");

    let pairs: Vec<_> = edges.iter().map(|edge| edge.endpoints()).collect();
    assert_eq!(pairs, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);

    let sequences: Vec<_> = edges.iter().map(|edge| edge.sequence()).collect();
    assert_eq!(sequences, [0, 1, 2, 3, 4, 5]);

    let distances: Vec<_> = edges.iter().map(|edge| edge.distance()).collect();
    assert_eq!(distances, [1, 4, 9, 5, 10, 13]);
}

#[test]
fn ranking_breaks_ties_by_generation_order() {
    // Unit square: four sides at distance 1, two diagonals at distance 2.
    let store = store(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]);
    let ranking = EdgeRanking::build(&store).expect("ranking must build");

    let ranked: Vec<_> = ranking
        .iter()
        .map(|edge| (edge.endpoints(), edge.distance()))
        .collect();
    assert_eq!(
        ranked,
        [
            ((0, 1), 1),
            ((0, 2), 1),
            ((1, 3), 1),
            ((2, 3), 1),
            ((0, 3), 2),
            ((1, 2), 2),
        ]
    );
}

#[test]
fn ranking_is_sorted_and_complete() {
    let store = store(&[(5, -3, 2), (0, 0, 0), (9, 9, 9), (-4, 1, 7), (5, -3, 2)]);
    let ranking = EdgeRanking::build(&store).expect("ranking must build");

    assert_eq!(ranking.len(), 10);
    assert!(ranking.edges().windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ranking.edges()[0].distance(), 0, "duplicate points rank first");
    assert!(ranking.iter().all(|edge| edge.source() < edge.target()));
}

#[cfg(feature = "cpu")]
#[test]
fn parallel_build_matches_sequential_build() {
    let points: Vec<(i64, i64, i64)> = (0..60_i64)
        .map(|index| ((index * 7) % 11, (index * 5) % 13, (index * 3) % 4))
        .collect();
    let store = store(&points);

    let sequential = EdgeRanking::build(&store).expect("sequential ranking must build");
    let parallel = EdgeRanking::par_build(&store).expect("parallel ranking must build");
    assert_eq!(sequential, parallel);
}
