//! Random-surfer transition model
//!
//! With probability `damping` the surfer follows one of the current page's links
//! (chosen uniformly); otherwise it teleports to any page uniformly. A dangling
//! page teleports with probability 1.

use crate::config::validate_damping;
use crate::error::RankError;
use crate::rank::Distribution;
use crate::storage::{LinkGraph, NodeId};
use anyhow::{anyhow, Result};

/// Next-page distribution for a surfer currently on `page`
///
/// ```text
/// P(c) = 1/N                                   if page is dangling
/// P(c) = (1-d)/N + [c ∈ links(page)] * d/|links(page)|   otherwise
/// ```
///
/// # Errors
///
/// - [`RankError::InvalidDamping`] if `damping` is outside (0, 1)
/// - [`RankError::UnknownNode`] if `page` is not in the graph
///
/// # Example
///
/// ```
/// use trueno_rank::{transition, LinkGraph};
///
/// let graph = LinkGraph::from_pages([
///     ("1.html", vec!["2.html", "3.html"]),
///     ("2.html", vec!["3.html"]),
///     ("3.html", vec!["2.html"]),
/// ]);
///
/// let dist = transition(&graph, "1.html", 0.85).unwrap();
/// assert!((dist.get("1.html").unwrap() - 0.05).abs() < 1e-12);
/// assert!((dist.get("2.html").unwrap() - 0.475).abs() < 1e-12);
/// assert!((dist.total() - 1.0).abs() < 1e-12);
/// ```
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    let node = graph
        .node_id(page)
        .ok_or_else(|| anyhow!(RankError::UnknownNode(page.to_string())))?;

    let weights = transition_weights(graph, node, damping)?;
    Ok(graph
        .nodes()
        .map(|(id, name)| (name.to_string(), weights[id.0 as usize]))
        .collect())
}

/// Dense transition row for `node`, indexed by `NodeId`
///
/// Damping is assumed already validated.
#[allow(clippy::cast_precision_loss)] // Graphs >2^52 nodes unlikely
pub(crate) fn transition_weights(
    graph: &LinkGraph,
    node: NodeId,
    damping: f64,
) -> Result<Vec<f64>> {
    let n = graph.num_nodes();
    let links = graph.outgoing_neighbors(node)?;

    if links.is_empty() {
        return Ok(vec![1.0 / n as f64; n]);
    }

    let mut weights = vec![(1.0 - damping) / n as f64; n];
    let follow = damping / links.len() as f64;
    for &target in links {
        weights[target as usize] += follow;
    }
    Ok(weights)
}
