//! Seeded synthetic point clouds.

use proxima_core::{Point, PointStore};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised while validating a synthetic configuration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// Clustered clouds need at least one cluster.
    #[error("cluster_count must be greater than zero")]
    ZeroClusters,
    /// The coordinate extent must be positive.
    #[error("extent must be greater than zero")]
    ZeroExtent,
    /// The cluster spread must not exceed the extent.
    #[error("spread {spread} exceeds extent {extent}")]
    SpreadExceedsExtent {
        /// Requested spread.
        spread: i64,
        /// Requested extent.
        extent: i64,
    },
}

/// Configuration of a synthetic point cloud.
///
/// Cluster centres are drawn uniformly from `[-extent, extent]` on every
/// axis; members are placed within `spread` of their centre.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Number of clusters the points are spread over.
    pub cluster_count: usize,
    /// Half-width of the coordinate range for cluster centres.
    pub extent: i64,
    /// Half-width of each cluster.
    pub spread: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticConfig {
    /// A uniformly scattered cloud of `point_count` points.
    #[must_use]
    pub const fn uniform(point_count: usize, seed: u64) -> Self {
        Self {
            point_count,
            cluster_count: 1,
            extent: 0,
            spread: 100_000,
            seed,
        }
    }
}

/// Generates a point store from `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is inconsistent.
pub fn generate(config: &SyntheticConfig) -> Result<PointStore, SyntheticError> {
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.spread <= 0 {
        return Err(SyntheticError::ZeroExtent);
    }
    if config.extent > 0 && config.spread > config.extent {
        return Err(SyntheticError::SpreadExceedsExtent {
            spread: config.spread,
            extent: config.extent,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let centres: Vec<Point> = (0..config.cluster_count)
        .map(|_| random_point(&mut rng, config.extent))
        .collect();

    Ok((0..config.point_count)
        .zip(centres.iter().cycle())
        .map(|(_, centre)| {
            let offset = random_point(&mut rng, config.spread);
            Point::new(
                centre.x().saturating_add(offset.x()),
                centre.y().saturating_add(offset.y()),
                centre.z().saturating_add(offset.z()),
            )
        })
        .collect())
}

fn random_point(rng: &mut SmallRng, extent: i64) -> Point {
    Point::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}
