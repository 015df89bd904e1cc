//! Text provider for line-based `x,y,z` point lists implementing
//! [`PointSource`].
use std::io::BufRead;

use proxima_core::{Point, PointSource, PointSourceError};
use thiserror::Error;

/// How [`TextPointProvider::try_from_reader`] treats lines that are not
/// three comma-separated integers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ParseMode {
    /// Fail on the first malformed line.
    #[default]
    Strict,
    /// Drop malformed lines and keep reading.
    SkipMalformed,
}

/// Errors raised while reading a point list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextPointProviderError {
    /// A non-blank line did not hold exactly three integers.
    #[error("line {line} is not an `x,y,z` integer triple: {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line without its terminator.
        content: String,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read point list: {0}")]
    Io(#[from] std::io::Error),
}

/// Points read from a UTF-8 text source, one per line.
#[derive(Clone, Debug)]
pub struct TextPointProvider {
    name: String,
    points: Vec<Point>,
}

impl TextPointProvider {
    /// Creates a provider over already parsed points.
    ///
    /// # Examples
    /// ```
    /// use proxima_core::{Point, PointSource};
    /// use proxima_providers_text::TextPointProvider;
    ///
    /// let provider = TextPointProvider::new("demo", vec![Point::new(1, 2, 3)]);
    /// assert_eq!(provider.len(), 1);
    /// assert_eq!(provider.name(), "demo");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Reads `x,y,z` lines from `reader`. Blank lines are ignored.
    ///
    /// # Errors
    /// Returns [`TextPointProviderError::Io`] when reading fails and, in
    /// [`ParseMode::Strict`], [`TextPointProviderError::MalformedLine`] for the
    /// first line that does not parse.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use proxima_providers_text::{ParseMode, TextPointProvider};
    ///
    /// let input = Cursor::new("162,817,812\n57,618,57\n");
    /// let provider = TextPointProvider::try_from_reader("demo", input, ParseMode::Strict)?;
    /// assert_eq!(provider.points().len(), 2);
    /// # Ok::<(), proxima_providers_text::TextPointProviderError>(())
    /// ```
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
        mode: ParseMode,
    ) -> Result<Self, TextPointProviderError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_point(&line) {
                Some(point) => points.push(point),
                None if mode == ParseMode::SkipMalformed => {}
                None => {
                    return Err(TextPointProviderError::MalformedLine {
                        line: index + 1,
                        content: line,
                    });
                }
            }
        }
        Ok(Self::new(name, points))
    }

    /// Returns the parsed points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

fn parse_point(line: &str) -> Option<Point> {
    let mut fields = line.split(',').map(|field| field.trim().parse::<i64>());
    let x = fields.next()?.ok()?;
    let y = fields.next()?.ok()?;
    let z = fields.next()?.ok()?;
    fields.next().is_none().then_some(Point::new(x, y, z))
}

impl PointSource for TextPointProvider {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point(&self, index: usize) -> Result<Point, PointSourceError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PointSourceError::OutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    fn points(&self) -> Result<Vec<Point>, PointSourceError> {
        Ok(self.points.clone())
    }
}
