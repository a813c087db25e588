//! Graph storage layer
//!
//! Provides the closed link graph in CSR (Compressed Sparse Row) representation.

pub mod csr;

pub use csr::{LinkGraph, NodeId};
