//! Error taxonomy for ranking runs
//!
//! Public operations return [`anyhow::Result`]; the concrete cause is always a
//! [`RankError`] and can be recovered with `err.downcast_ref::<RankError>()`.

use thiserror::Error;

/// Reasons a ranking call is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// Damping factor outside the open interval (0, 1)
    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// Sampler asked for zero samples
    #[error("sample count must be positive")]
    InvalidSampleCount,

    /// Convergence tolerance not a positive finite number
    #[error("convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    /// Iteration cap of zero
    #[error("iteration cap must be positive")]
    InvalidIterationCap,

    /// Page name not present in the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Node index past the end of the graph
    #[error("node ID {0} out of bounds")]
    NodeOutOfBounds(u32),

    /// Iterative solver hit its cap before every delta dropped under tolerance
    #[error("no convergence after {iterations} iterations (max delta {max_delta:.3e})")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// Largest per-node change in the last iteration
        max_delta: f64,
    },

    /// Weighted draw could not be set up from the transition weights
    #[error("sampling failed: {0}")]
    Sampling(String),
}
