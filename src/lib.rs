//! # Densegraph
//!
//! Densegraph is a small Rust library for graphs stored as a dense adjacency
//! matrix. Graphs may be directed or undirected, weighted or unweighted, and
//! the representation of a missing arc (`0` or `+inf`) is chosen per graph.
//!
//! On top of the [`AdjacencyGraph`](graph::AdjacencyGraph) model the library
//! provides three analyses:
//!
//! - boolean transitive closure (Floyd–Warshall),
//! - single-source shortest paths (Dijkstra, linear-scan minimum),
//! - all-pairs shortest-path distances for routing tables.
//!
//! Every algorithm borrows the graph immutably and returns freshly owned
//! results, so the graph can keep being queried or grown afterwards.

pub mod graph;
pub mod matrix;
pub mod num_traits;

pub use graph::{
    algorithms::dijkstra::ShortestPaths,
    builder::GraphBuilder,
    config::{ConfigError, FillMode, GraphConfig},
    AdjacencyGraph, ArcRecord, Direction, GraphError, Neighbors, NodeIndex, NodeVec,
};
pub use matrix::Matrix;
pub use num_traits::Weight;
