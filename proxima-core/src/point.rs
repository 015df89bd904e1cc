//! Integer points in 3-space and the immutable store that indexes them.
//!
//! A point's position in the [`PointStore`] is its only identity: edges,
//! forest elements and closing edges all refer to points by index.

use std::{fmt, ops::Index, slice};

use crate::{datasource::PointSource, error::PointSourceError};

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Axis {
    /// The first coordinate.
    #[default]
    X,
    /// The second coordinate.
    Y,
    /// The third coordinate.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
            Self::Z => f.write_str("z"),
        }
    }
}

/// A point with signed 64-bit integer coordinates.
///
/// # Examples
/// ```
/// use proxima_core::{Axis, Point};
///
/// let a = Point::new(0, 0, 0);
/// let b = Point::new(1, -2, 2);
/// assert_eq!(a.squared_distance(b), 9);
/// assert_eq!(b.coordinate(Axis::Y), -2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

impl Point {
    /// Builds a point from its coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i64 { self.x }

    /// Returns the y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i64 { self.y }

    /// Returns the z coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i64 { self.z }

    /// Returns the coordinate on `axis`.
    #[must_use]
    pub const fn coordinate(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Differences are taken as absolute values in `u64` and the sum
    /// saturates, so extreme coordinates clamp to `u64::MAX` instead of
    /// wrapping.
    #[must_use]
    pub const fn squared_distance(self, other: Self) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_mul(dx)
            .saturating_add(dy.saturating_mul(dy))
            .saturating_add(dz.saturating_mul(dz))
    }
}

impl From<(i64, i64, i64)> for Point {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Ordered, immutable collection of points.
///
/// # Examples
/// ```
/// use proxima_core::{Point, PointStore};
///
/// let store: PointStore = [(0, 0, 0), (3, 4, 0)].into_iter().map(Point::from).collect();
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(1), Some(Point::new(3, 4, 0)));
/// assert_eq!(store.get(2), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Wraps `points`, keeping their order as their indices.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Copies every point out of `source` in index order.
    ///
    /// # Errors
    /// Propagates the first [`PointSourceError`] raised by the source.
    pub fn from_source<S: PointSource + ?Sized>(source: &S) -> Result<Self, PointSourceError> {
        Ok(Self::new(source.points()?))
    }

    /// Number of stored points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Returns all points in index order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in index order.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl Index<usize> for PointStore {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PointSource for PointStore {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &str {
        "point-store"
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        self.get(index).ok_or(PointSourceError::OutOfBounds {
            index,
            len: self.points.len(),
        })
    }
}
