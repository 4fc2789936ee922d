//! # Graph Algorithms on the Adjacency Matrix
//!
//! Every algorithm here borrows an [`AdjacencyGraph`](super::AdjacencyGraph)
//! immutably and returns newly owned results.
//!
//! ## Available Algorithms
//!
//! ### Reachability
//! - [`transitive_closure`]: boolean Floyd–Warshall closure
//!
//! ### Shortest Paths
//! - [`dijkstra`]: single-source distances and predecessor links
//! - [`routing`]: all-pairs distances, as used for routing tables
//!
//! The two Floyd–Warshall variants work on a deep copy of the matrix; Dijkstra
//! reads the graph through [`successors`](super::AdjacencyGraph::successors)
//! and never copies it.

pub mod dijkstra;
pub mod routing;
pub mod transitive_closure;
