//! Ranking algorithms (transition model, sampling and iterative `PageRank`)

pub mod pagerank;
pub mod sampling;
pub mod transition;

pub use pagerank::{iterate_rank, iterate_rank_with, IterativeRank};
pub use sampling::{sample_rank, sample_rank_seeded, sample_rank_with, sample_rank_with_rng};
pub use transition::transition;
