//! Closed link graph in CSR (Compressed Sparse Row) form
//!
//! Based on `GraphBLAST` (Yang et al., ACM `ToMS` 2022) sparse layout, with node
//! names mapped to dense zero-based indices.
//!
//! # CSR Format
//!
//! ```text
//! Pages: a → {b}, b → {a, c}, c → {}
//!
//! Names (sorted): [a, b, c]
//! CSR:
//!   row_offsets: [0, 1, 3, 3]  // a: links [0..1), b: [1..3), c: [3..3) (dangling)
//!   col_indices: [1, 0, 2]
//! ```

use crate::error::RankError;
use anyhow::{bail, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Node identifier (zero-indexed, assigned in name order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Immutable link graph closed over its own node set
///
/// Guarantees:
/// - every link target is a node of the graph (references to unknown pages are dropped)
/// - no node links to itself
/// - each node's links are unique and sorted by target index
///
/// # Example
///
/// ```
/// use trueno_rank::LinkGraph;
///
/// let graph = LinkGraph::from_pages([
///     ("a.html", vec!["b.html", "missing.html"]),
///     ("b.html", vec!["a.html", "b.html"]),
/// ]);
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.num_edges(), 2); // external link and self-link dropped
/// let links: Vec<_> = graph.links("b.html").unwrap().collect();
/// assert_eq!(links, vec!["a.html"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    /// Forward CSR: node i's links start at `row_offsets`[i]
    /// Length: `num_nodes` + 1 (or 0 for the empty graph)
    row_offsets: Vec<u32>,

    /// Forward CSR: link targets
    col_indices: Vec<u32>,

    /// Reverse CSR: node i's inbound links start at `rev_row_offsets`[i]
    rev_row_offsets: Vec<u32>,

    /// Reverse CSR: link sources
    rev_col_indices: Vec<u32>,

    /// Node names, indexed by `NodeId`
    names: Vec<String>,

    /// Name → index lookup
    index: HashMap<String, u32>,
}

impl LinkGraph {
    /// Build the closed graph from `(page, raw references)` pairs
    ///
    /// Pass 1 collects every page's reference set without self-references
    /// (pages listed twice have their references merged). Pass 2 keeps only
    /// references that name a known page.
    ///
    /// An empty input yields an empty graph.
    #[allow(clippy::cast_possible_truncation)] // Corpora >4B pages not supported
    pub fn from_pages<I, N, R, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Pass 1: raw reference sets
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, refs) in pages {
            let page = page.into();
            let entry = raw.entry(page.clone()).or_default();
            entry.extend(refs.into_iter().map(Into::<String>::into).filter(|r| *r != page));
        }

        let names: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, u32> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32))
            .collect();

        // Pass 2: restrict to known pages
        let mut adj_list: Vec<Vec<u32>> = Vec::with_capacity(names.len());
        let mut dropped = 0_usize;
        for refs in raw.values() {
            let mut targets: Vec<u32> = Vec::with_capacity(refs.len());
            for r in refs {
                match index.get(r) {
                    Some(&target) => targets.push(target),
                    None => dropped += 1,
                }
            }
            targets.sort_unstable();
            adj_list.push(targets);
        }

        let graph = Self::from_adjacency(names, index, &adj_list);
        debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            dropped,
            "built link graph"
        );
        graph
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_adjacency(
        names: Vec<String>,
        index: HashMap<String, u32>,
        adj_list: &[Vec<u32>],
    ) -> Self {
        if names.is_empty() {
            return Self::default();
        }

        let num_nodes = names.len();
        let mut rev_adj_list: Vec<Vec<u32>> = vec![Vec::new(); num_nodes];

        // Build forward CSR
        let mut row_offsets = Vec::with_capacity(num_nodes + 1);
        let mut col_indices = Vec::new();
        let mut offset = 0_u32;
        row_offsets.push(offset);

        for (src, targets) in adj_list.iter().enumerate() {
            offset += targets.len() as u32;
            row_offsets.push(offset);
            col_indices.extend_from_slice(targets);

            for &dst in targets {
                rev_adj_list[dst as usize].push(src as u32); // Reverse: dst ← src
            }
        }

        // Build reverse CSR
        let mut rev_row_offsets = Vec::with_capacity(num_nodes + 1);
        let mut rev_col_indices = Vec::with_capacity(col_indices.len());
        let mut rev_offset = 0_u32;
        rev_row_offsets.push(rev_offset);

        for sources in &rev_adj_list {
            rev_offset += sources.len() as u32;
            rev_row_offsets.push(rev_offset);
            rev_col_indices.extend_from_slice(sources);
        }

        Self {
            row_offsets,
            col_indices,
            rev_row_offsets,
            rev_col_indices,
            names,
            index,
        }
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Get number of links
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    /// True when the corpus had no pages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a node by page name
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied().map(NodeId)
    }

    /// Get node name
    #[must_use]
    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node.0 as usize).map(String::as_str)
    }

    /// Iterate `(NodeId, name)` in index order
    #[allow(clippy::cast_possible_truncation)]
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId(i as u32), name.as_str()))
    }

    /// Get outbound link targets of a node
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn outgoing_neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let (start, end) = self.bounds(&self.row_offsets, node)?;
        Ok(&self.col_indices[start..end])
    }

    /// Get pages linking to a node
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn incoming_neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let (start, end) = self.bounds(&self.rev_row_offsets, node)?;
        Ok(&self.rev_col_indices[start..end])
    }

    /// Number of outbound links
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.outgoing_neighbors(node)?.len())
    }

    /// A dangling node has no outbound links
    ///
    /// # Errors
    ///
    /// Returns error if node ID is out of bounds
    pub fn is_dangling(&self, node: NodeId) -> Result<bool> {
        Ok(self.out_degree(node)? == 0)
    }

    /// Outbound link targets of a page, by name
    ///
    /// Returns `None` for an unknown page.
    pub fn links<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let node = self.node_id(name)?;
        let targets = self.outgoing_neighbors(node).ok()?;
        Some(targets.iter().map(|&t| self.names[t as usize].as_str()))
    }

    /// Get CSR components `(row_offsets, col_indices)`
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32]) {
        (&self.row_offsets, &self.col_indices)
    }

    /// Get reverse CSR components `(rev_row_offsets, rev_col_indices)`
    #[must_use]
    pub fn reverse_csr_components(&self) -> (&[u32], &[u32]) {
        (&self.rev_row_offsets, &self.rev_col_indices)
    }

    fn bounds(&self, offsets: &[u32], node: NodeId) -> Result<(usize, usize)> {
        let idx = node.0 as usize;
        if idx >= self.num_nodes() {
            bail!(RankError::NodeOutOfBounds(node.0));
        }
        Ok((offsets[idx] as usize, offsets[idx + 1] as usize))
    }
}
