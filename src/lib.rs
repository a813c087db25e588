//! trueno-rank: `PageRank` estimation for link graphs
//!
//! # Overview
//!
//! Ranks the pages of a linked corpus two independent ways: a random-walk
//! Monte Carlo sampler and a fixed-point iterative solver. Both consume the same
//! immutable [`LinkGraph`] and return a [`RankVector`] summing to 1.0.
//!
//! # Quick Start
//!
//! ```
//! use trueno_rank::{iterate_rank, sample_rank_seeded, LinkGraph};
//!
//! // Pages and the raw references found in them
//! let graph = LinkGraph::from_pages([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html", "3.html"]),
//!     ("3.html", vec!["2.html", "4.html"]),
//!     ("4.html", vec!["2.html", "https://example.com"]), // external, dropped
//! ]);
//!
//! let sampled = sample_rank_seeded(&graph, 0.85, 10_000, 7).unwrap();
//! let iterated = iterate_rank(&graph, 0.85).unwrap();
//!
//! assert!((sampled.total() - 1.0).abs() < 1e-9);
//! assert!((iterated.total() - 1.0).abs() < 1e-9);
//! assert_eq!(iterated.sorted_by_rank()[0].0, "2.html");
//! ```
//!
//! # Architecture
//!
//! - **Storage**: closed link graph in CSR form with a reverse CSR for inbound links
//! - **Transition model**: damped random-surfer distribution, uniform from dangling pages
//! - **Sampling**: single seeded random walk, rank = visit frequency
//! - **Iteration**: Jacobi relaxation until every rank moves by ≤ 0.001

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod rank;
pub mod storage;

// Re-export core types
pub use algorithms::{
    iterate_rank, iterate_rank_with, sample_rank, sample_rank_seeded, sample_rank_with,
    sample_rank_with_rng, transition, IterativeRank,
};
pub use config::{
    PageRankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};
pub use error::RankError;
pub use rank::{Distribution, RankVector};
pub use storage::{LinkGraph, NodeId};

// Error type
pub use anyhow::{Error, Result};
