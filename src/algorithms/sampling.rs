//! Monte Carlo `PageRank` via a single long random walk
//!
//! The walk starts on a uniformly random page and moves according to the
//! transition model. A page's rank is the fraction of steps spent on it, which
//! converges to the stationary distribution as the walk grows.

use crate::algorithms::transition::transition_weights;
use crate::config::{validate_damping, validate_samples, PageRankConfig};
use crate::error::RankError;
use crate::rank::RankVector;
use crate::storage::{LinkGraph, NodeId};
use anyhow::{anyhow, Result};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Estimate `PageRank` by sampling `samples` pages (OS-seeded)
///
/// Results differ from run to run; use [`sample_rank_seeded`] for
/// reproducible output.
///
/// # Errors
///
/// - [`RankError::InvalidDamping`] if `damping` is outside (0, 1)
/// - [`RankError::InvalidSampleCount`] if `samples` is zero
pub fn sample_rank(graph: &LinkGraph, damping: f64, samples: usize) -> Result<RankVector> {
    sample_rank_with_rng(graph, damping, samples, &mut StdRng::from_entropy())
}

/// Estimate `PageRank` with a fixed seed
///
/// # Errors
///
/// Same as [`sample_rank`].
///
/// # Example
///
/// ```
/// use trueno_rank::{sample_rank_seeded, LinkGraph};
///
/// let graph = LinkGraph::from_pages([("a", vec!["b"]), ("b", vec!["a"])]);
///
/// let first = sample_rank_seeded(&graph, 0.85, 2_000, 42).unwrap();
/// let second = sample_rank_seeded(&graph, 0.85, 2_000, 42).unwrap();
/// assert_eq!(first, second);
/// assert!((first.total() - 1.0).abs() < 1e-9);
/// ```
pub fn sample_rank_seeded(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    seed: u64,
) -> Result<RankVector> {
    sample_rank_with_rng(graph, damping, samples, &mut StdRng::seed_from_u64(seed))
}

/// Estimate `PageRank` using `config.damping`, `config.samples` and `config.seed`
///
/// # Errors
///
/// Returns the first invalid field reported by [`PageRankConfig::validate_sampling`].
pub fn sample_rank_with(graph: &LinkGraph, config: &PageRankConfig) -> Result<RankVector> {
    config.validate_sampling()?;
    match config.seed {
        Some(seed) => sample_rank_seeded(graph, config.damping, config.samples, seed),
        None => sample_rank(graph, config.damping, config.samples),
    }
}

/// Estimate `PageRank` drawing every step from `rng`
///
/// All draws come from this one sequential stream, so a seeded generator gives
/// exactly reproducible visit counts.
///
/// # Algorithm
///
/// 1. Pick the first page uniformly, count one visit
/// 2. For the remaining `samples - 1` steps draw the next page from the
///    transition distribution of the current one (weighted choice), count a visit
/// 3. Divide visit counts by `samples`
///
/// # Errors
///
/// Same as [`sample_rank`].
#[allow(clippy::cast_precision_loss)] // Walks >2^52 steps unlikely
pub fn sample_rank_with_rng<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankVector> {
    validate_damping(damping)?;
    validate_samples(samples)?;

    let n = graph.num_nodes();
    if n == 0 {
        return Ok(RankVector::new());
    }

    let mut visits = vec![0_usize; n];

    let mut current = rng.gen_range(0..n);
    visits[current] += 1;

    // Only the current page's row is held; it is rebuilt when the walk moves
    let mut row = transition_row(graph, current, damping)?;
    let mut row_page = current;

    for _ in 1..samples {
        if row_page != current {
            row = transition_row(graph, current, damping)?;
            row_page = current;
        }
        current = row.sample(rng);
        visits[current] += 1;
    }

    debug!(nodes = n, samples, "sampled PageRank");

    let total = samples as f64;
    Ok(graph
        .nodes()
        .map(|(id, name)| (name.to_string(), visits[id.0 as usize] as f64 / total))
        .collect())
}

#[allow(clippy::cast_possible_truncation)]
fn transition_row(graph: &LinkGraph, node: usize, damping: f64) -> Result<WeightedIndex<f64>> {
    let weights = transition_weights(graph, NodeId(node as u32), damping)?;
    WeightedIndex::new(&weights).map_err(|e| anyhow!(RankError::Sampling(e.to_string())))
}
