//! Error types for the Proxima core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::PointSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PointSourceError {
    /// Requested index was outside the source's bounds.
    #[error("point index {index} is out of bounds for a source of {len} points")]
    OutOfBounds {
        /// The requested point index.
        index: usize,
        /// Number of points the source reported.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PointSourceError`] variants.
    enum PointSourceErrorCode for PointSourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "POINT_SOURCE_OUT_OF_BOUNDS",
    }
}

/// Error type produced when configuring or running [`crate::Proxima`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProximaError {
    /// At least one component must contribute to the cluster product.
    #[error("largest_components must be at least 1 (got {got})")]
    InvalidLargestComponents {
        /// The rejected value.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// The complete graph over the store has more edges than fit in memory
    /// addressing.
    #[error("{points} points produce more pairwise edges than can be addressed")]
    EdgeCountOverflow {
        /// Number of points in the store.
        points: usize,
    },
    /// A [`crate::PointSource`] failed while the store was being loaded.
    #[error("point source `{data_source}` failed: {error}")]
    PointSource {
        /// Name reported by the failing source.
        data_source: Arc<str>,
        #[source]
        /// Underlying source error.
        error: PointSourceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ProximaError`] variants.
    enum ProximaErrorCode for ProximaError {
        /// At least one component must contribute to the cluster product.
        InvalidLargestComponents => InvalidLargestComponents { .. } => "PROXIMA_INVALID_LARGEST_COMPONENTS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "PROXIMA_BACKEND_UNAVAILABLE",
        /// The complete graph has too many edges to address.
        EdgeCountOverflow => EdgeCountOverflow { .. } => "PROXIMA_EDGE_COUNT_OVERFLOW",
        /// A [`crate::PointSource`] failed while the store was being loaded.
        PointSourceFailure => PointSource { .. } => "PROXIMA_POINT_SOURCE_FAILURE",
    }
}

impl ProximaError {
    /// Retrieve the inner [`PointSourceErrorCode`] when the error originated in
    /// a [`crate::PointSource`].
    #[must_use]
    pub const fn point_source_code(&self) -> Option<PointSourceErrorCode> {
        match self {
            Self::PointSource { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ProximaError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(ProximaError::InvalidLargestComponents { got: 0 }, "PROXIMA_INVALID_LARGEST_COMPONENTS")]
    #[case(
        ProximaError::BackendUnavailable { requested: ExecutionStrategy::Parallel },
        "PROXIMA_BACKEND_UNAVAILABLE"
    )]
    #[case(ProximaError::EdgeCountOverflow { points: usize::MAX }, "PROXIMA_EDGE_COUNT_OVERFLOW")]
    fn codes_are_stable(#[case] error: ProximaError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
        assert_eq!(error.point_source_code(), None);
    }

    #[test]
    fn point_source_failures_expose_inner_code() {
        let error = ProximaError::PointSource {
            data_source: Arc::from("cloud"),
            error: PointSourceError::OutOfBounds { index: 4, len: 2 },
        };
        assert_eq!(error.code(), ProximaErrorCode::PointSourceFailure);
        assert_eq!(
            error.point_source_code().map(PointSourceErrorCode::as_str),
            Some("POINT_SOURCE_OUT_OF_BOUNDS")
        );
        assert_eq!(
            error.to_string(),
            "point source `cloud` failed: point index 4 is out of bounds for a source of 2 points"
        );
    }
}
