use proxima_core::{Point, PointSource, PointSourceError};

/// In-memory source that can be told to lose its trailing points.
#[derive(Clone)]
pub struct Cloud {
    points: Vec<Point>,
    readable: usize,
}

impl Cloud {
    #[must_use]
    pub fn new(points: &[(i64, i64, i64)]) -> Self {
        let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
        let readable = points.len();
        Self { points, readable }
    }

    /// Keeps reporting every point in `len` but fails reads past `readable`.
    #[must_use]
    pub fn truncated(mut self, readable: usize) -> Self {
        self.readable = readable;
        self
    }
}

impl PointSource for Cloud {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &str {
        "cloud"
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        if index >= self.readable {
            return Err(PointSourceError::OutOfBounds {
                index,
                len: self.readable,
            });
        }
        self.points
            .get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds {
                index,
                len: self.points.len(),
            })
    }
}
