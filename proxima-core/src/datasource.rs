//! Point source abstraction at the ingestion boundary.

use crate::{error::PointSourceError, point::Point};

/// Abstraction over an ordered, indexed collection of points.
///
/// The index a source assigns to a point becomes that point's identity for
/// edge generation and tie-breaking, so implementations must keep it stable.
///
/// # Examples
/// ```
/// use proxima_core::{Point, PointSource, PointSourceError};
///
/// struct Line(Vec<i64>);
///
/// impl PointSource for Line {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "line" }
///     fn point(&self, index: usize) -> Result<Point, PointSourceError> {
///         let x = self.0.get(index).ok_or(PointSourceError::OutOfBounds {
///             index,
///             len: self.0.len(),
///         })?;
///         Ok(Point::new(*x, 0, 0))
///     }
/// }
///
/// let line = Line(vec![0, 2, 5]);
/// assert_eq!(line.point(2)?, Point::new(5, 0, 0));
/// assert_eq!(line.points()?.len(), 3);
/// # Ok::<(), PointSourceError>(())
/// ```
pub trait PointSource {
    /// Returns the number of points in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no points.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the point at `index`.
    ///
    /// # Errors
    /// Implementations must return [`PointSourceError::OutOfBounds`] when
    /// `index >= len()`.
    fn point(&self, index: usize) -> Result<Point, PointSourceError>;

    /// Collects every point in index order.
    ///
    /// # Errors
    /// Returns the first error surfaced by [`PointSource::point`].
    fn points(&self) -> Result<Vec<Point>, PointSourceError> {
        (0..self.len()).map(|index| self.point(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Claims more points than it can produce.
    struct ShortSource;

    impl PointSource for ShortSource {
        fn len(&self) -> usize {
            3
        }

        fn name(&self) -> &str {
            "short"
        }

        fn point(&self, index: usize) -> Result<Point, PointSourceError> {
            if index < 2 {
                Ok(Point::new(0, 0, i64::try_from(index).unwrap_or(i64::MAX)))
            } else {
                Err(PointSourceError::OutOfBounds { index, len: 2 })
            }
        }
    }

    #[test]
    fn points_propagates_first_failure() {
        let err = ShortSource.points().expect_err("third point is missing");
        assert_eq!(err, PointSourceError::OutOfBounds { index: 2, len: 2 });
        assert!(!ShortSource.is_empty());
    }
}
