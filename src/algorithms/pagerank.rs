//! `PageRank` by fixed-point relaxation
//!
//! Based on Page et al. (1999) "The `PageRank` Citation Ranking: Bringing Order to the Web"
//! Implementation uses Jacobi-style power iteration over the reverse CSR.

use crate::config::PageRankConfig;
use crate::error::RankError;
use crate::rank::RankVector;
use crate::storage::LinkGraph;
use anyhow::{bail, Result};
use tracing::{debug, trace};

/// Outcome of an iterative `PageRank` run
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeRank {
    /// Final rank per page (sum = 1.0)
    pub ranks: RankVector,

    /// Relaxation passes performed
    pub iterations: usize,

    /// Largest per-node change in the last pass (≤ tolerance)
    pub max_delta: f64,
}

/// Compute `PageRank` scores by iterating until every rank settles
///
/// Uses the default tolerance (0.001 per node) and iteration cap.
///
/// # Errors
///
/// - [`RankError::InvalidDamping`] if `damping` is outside (0, 1)
/// - [`RankError::NotConverged`] if the iteration cap is reached first
///
/// # Example
///
/// ```
/// use trueno_rank::{iterate_rank, LinkGraph};
///
/// let graph = LinkGraph::from_pages([
///     ("a", vec!["b"]),
///     ("b", vec!["c"]),
///     ("c", vec!["a"]), // Cycle
/// ]);
///
/// let ranks = iterate_rank(&graph, 0.85).unwrap();
/// assert_eq!(ranks.len(), 3);
/// assert!((ranks.total() - 1.0).abs() < 1e-9); // Sum = 1.0
/// ```
pub fn iterate_rank(graph: &LinkGraph, damping: f64) -> Result<RankVector> {
    let config = PageRankConfig::default().with_damping(damping);
    Ok(iterate_rank_with(graph, &config)?.ranks)
}

/// Compute `PageRank` scores with explicit tolerance and iteration cap
///
/// # Algorithm
///
/// ```text
/// PR'(p) = (1-d)/N + d * ( Σ_{q → p} PR(q)/outdegree(q) + Σ_{q dangling} PR(q)/N )
/// ```
///
/// Every `PR'` is computed from the previous pass before any value is replaced.
/// Stops once `|PR'(p) - PR(p)| ≤ tolerance` for every page and returns `PR'`.
///
/// # Errors
///
/// - Any invalid field reported by [`PageRankConfig::validate_iteration`]
/// - [`RankError::NotConverged`] if `max_iterations` passes do not settle
#[allow(clippy::cast_precision_loss)] // Graphs >2^52 nodes unlikely
pub fn iterate_rank_with(graph: &LinkGraph, config: &PageRankConfig) -> Result<IterativeRank> {
    config.validate_iteration()?;

    let n = graph.num_nodes();
    if n == 0 {
        return Ok(IterativeRank {
            ranks: RankVector::new(),
            iterations: 0,
            max_delta: 0.0,
        });
    }

    let damping = config.damping;
    let n_f64 = n as f64;
    let teleport = (1.0 - damping) / n_f64;

    let (row_offsets, _) = graph.csr_components();
    let out_degrees: Vec<u32> = row_offsets.windows(2).map(|w| w[1] - w[0]).collect();
    let (rev_row_offsets, rev_col_indices) = graph.reverse_csr_components();

    // Initialize: uniform distribution
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0; n];
    let mut max_delta = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        // Dangling pages spread their rank over every page
        let dangling_mass: f64 = out_degrees
            .iter()
            .zip(&ranks)
            .filter(|(&deg, _)| deg == 0)
            .map(|(_, &rank)| rank)
            .sum();
        let dangling_share = dangling_mass / n_f64;

        for (page, slot) in new_ranks.iter_mut().enumerate() {
            let start = rev_row_offsets[page] as usize;
            let end = rev_row_offsets[page + 1] as usize;

            let inbound: f64 = rev_col_indices[start..end]
                .iter()
                .map(|&src| ranks[src as usize] / f64::from(out_degrees[src as usize]))
                .sum();

            *slot = teleport + damping * (inbound + dangling_share);
        }

        max_delta = ranks
            .iter()
            .zip(&new_ranks)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, f64::max);

        // Swap buffers
        std::mem::swap(&mut ranks, &mut new_ranks);
        trace!(iteration, max_delta, "PageRank pass");

        if max_delta <= config.tolerance {
            debug!(nodes = n, iterations = iteration, max_delta, "PageRank converged");
            return Ok(IterativeRank {
                ranks: graph
                    .nodes()
                    .map(|(id, name)| (name.to_string(), ranks[id.0 as usize]))
                    .collect(),
                iterations: iteration,
                max_delta,
            });
        }
    }

    bail!(RankError::NotConverged {
        iterations: config.max_iterations,
        max_delta,
    })
}
