//! Shared test utilities for `proxima-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use proxima_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::point::{Point, PointStore};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps every property suite on the same `PROPTEST_CASES` and
/// `PROXIMA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Stores of up to `max_points` points on a small grid.
///
/// The narrow coordinate range makes coincident points and equidistant pairs
/// common, which is where ranking tie-breaks matter.
pub(crate) fn point_store_strategy(max_points: usize) -> impl Strategy<Value = PointStore> {
    prop::collection::vec((-6_i64..=6, -6_i64..=6, -6_i64..=6), 0..=max_points)
        .prop_map(|coordinates| coordinates.into_iter().map(Point::from).collect())
}
