//! Run configuration for both estimators

use crate::error::RankError;
use anyhow::{bail, Result};

/// Damping factor (Google standard)
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Random-walk length for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Per-node absolute change below which the iterative estimator stops
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Upper bound on relaxation passes
///
/// With damping < 1 the update is a contraction, so any valid graph converges
/// long before this under the default tolerance.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// `PageRank` run configuration
///
/// # Example
///
/// ```
/// use trueno_rank::PageRankConfig;
///
/// let config = PageRankConfig::default().with_samples(500).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(PageRankConfig::default().with_damping(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following an outbound link instead of teleporting
    pub damping: f64,

    /// Number of pages visited by the random walk
    pub samples: usize,

    /// Convergence threshold for the iterative estimator
    pub tolerance: f64,

    /// Maximum relaxation passes for the iterative estimator
    pub max_iterations: usize,

    /// Seed for the sampler; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl PageRankConfig {
    /// Set the damping factor
    #[must_use]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the random-walk length
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the convergence threshold
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Fix the sampler seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field
    ///
    /// # Errors
    ///
    /// Returns the first [`RankError`] found, checking damping, sample count,
    /// tolerance and iteration cap in that order.
    pub fn validate(&self) -> Result<()> {
        self.validate_sampling()?;
        self.validate_iteration()
    }

    /// Check the fields the sampling estimator reads (damping, samples)
    ///
    /// # Errors
    ///
    /// [`RankError::InvalidDamping`] or [`RankError::InvalidSampleCount`]
    pub fn validate_sampling(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_samples(self.samples)
    }

    /// Check the fields the iterative estimator reads (damping, tolerance, cap)
    ///
    /// # Errors
    ///
    /// [`RankError::InvalidDamping`], [`RankError::InvalidTolerance`] or
    /// [`RankError::InvalidIterationCap`]
    pub fn validate_iteration(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_tolerance(self.tolerance)?;
        if self.max_iterations == 0 {
            bail!(RankError::InvalidIterationCap);
        }
        Ok(())
    }
}

/// Reject damping outside (0, 1), NaN included
pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        bail!(RankError::InvalidDamping(damping))
    }
}

pub(crate) fn validate_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        bail!(RankError::InvalidSampleCount);
    }
    Ok(())
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        bail!(RankError::InvalidTolerance(tolerance))
    }
}
