//! Builder utilities for configuring Proxima analyses.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before a [`Proxima`] instance is constructed.

use std::num::NonZeroUsize;

use crate::{Result, error::ProximaError, proxima::Proxima};

/// Edge budget used by the bounded clustering when none is configured.
pub const DEFAULT_EDGE_BUDGET: usize = 1_000;

/// Number of largest components multiplied when none is configured.
pub const DEFAULT_LARGEST_COMPONENTS: usize = 3;

/// Indicates how edge generation and ranking are executed.
///
/// Union processing is always sequential; only the quadratic edge
/// enumeration and the sort are affected. Every strategy produces the same
/// ranking.
///
/// # Examples
/// ```
/// use proxima_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Use the rayon pool when the `cpu` feature is compiled in.
    #[default]
    Auto,
    /// Stay on the calling thread.
    Sequential,
    /// Require the rayon pool.
    Parallel,
}

impl ExecutionStrategy {
    pub(crate) fn resolve_parallel(self) -> Result<bool> {
        match self {
            Self::Auto => Ok(cfg!(feature = "cpu")),
            Self::Sequential => Ok(false),
            #[cfg(feature = "cpu")]
            Self::Parallel => Ok(true),
            #[cfg(not(feature = "cpu"))]
            Self::Parallel => Err(ProximaError::BackendUnavailable {
                requested: Self::Parallel,
            }),
        }
    }
}

/// Configures and constructs [`Proxima`] instances.
///
/// # Examples
/// ```
/// use proxima_core::{ExecutionStrategy, ProximaBuilder};
///
/// let proxima = ProximaBuilder::new()
///     .with_edge_budget(10)
///     .with_largest_components(2)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(proxima.edge_budget(), 10);
/// assert_eq!(proxima.largest_components().get(), 2);
/// assert_eq!(proxima.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct ProximaBuilder {
    edge_budget: usize,
    largest_components: usize,
    execution_strategy: ExecutionStrategy,
}

impl Default for ProximaBuilder {
    fn default() -> Self {
        Self {
            edge_budget: DEFAULT_EDGE_BUDGET,
            largest_components: DEFAULT_LARGEST_COMPONENTS,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl ProximaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use proxima_core::{ExecutionStrategy, ProximaBuilder};
    ///
    /// let builder = ProximaBuilder::new();
    /// assert_eq!(builder.edge_budget(), 1_000);
    /// assert_eq!(builder.largest_components(), 3);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of ranked edges the bounded clustering consumes.
    #[must_use]
    pub const fn with_edge_budget(mut self, budget: usize) -> Self {
        self.edge_budget = budget;
        self
    }

    /// Returns the configured edge budget.
    #[must_use]
    pub const fn edge_budget(&self) -> usize {
        self.edge_budget
    }

    /// Overrides how many of the largest components are multiplied.
    #[must_use]
    pub const fn with_largest_components(mut self, count: usize) -> Self {
        self.largest_components = count;
        self
    }

    /// Returns the configured number of multiplied components.
    #[must_use]
    pub const fn largest_components(&self) -> usize {
        self.largest_components
    }

    /// Sets the execution strategy used to build the edge ranking.
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Proxima`] instance.
    ///
    /// # Errors
    /// Returns [`ProximaError::InvalidLargestComponents`] when the component
    /// count is zero and [`ProximaError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `cpu` feature.
    ///
    /// # Examples
    /// ```
    /// use proxima_core::{ProximaBuilder, ProximaError};
    ///
    /// let err = ProximaBuilder::new().with_largest_components(0).build().unwrap_err();
    /// assert!(matches!(err, ProximaError::InvalidLargestComponents { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Proxima> {
        let largest_components = NonZeroUsize::new(self.largest_components).ok_or(
            ProximaError::InvalidLargestComponents {
                got: self.largest_components,
            },
        )?;
        self.execution_strategy.resolve_parallel()?;

        Ok(Proxima::new(
            self.edge_budget,
            largest_components,
            self.execution_strategy,
        ))
    }
}
