//! # Adjacency-Matrix Graphs
//!
//! [`AdjacencyGraph`] keeps three views of the same graph:
//!
//! - the node keys, in insertion order; a node's position in that list is its
//!   [`NodeIndex`] and never changes,
//! - the arcs, in insertion order, as they were supplied,
//! - a dense `N x N` adjacency matrix where row `f`, column `t` holds the
//!   weight of the arc from node `f` to node `t`.
//!
//! Missing arcs are stored as `None`. The [`FillMode`] sentinel (`0` or
//! `+inf`) only shows up in [`AdjacencyGraph::snapshot`] and in the rendered
//! outputs of the algorithms, so a zero-weight arc is never mistaken for a
//! missing one inside the model itself.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use thiserror::Error;
use tracing::trace;

use crate::matrix::Matrix;
use crate::num_traits::Weight;

use config::{ConfigError, FillMode, GraphConfig};

mod typed_vec;

pub mod algorithms;
pub mod builder;
pub mod config;

crate::define_indexed_vec!(
    /// Position of a node in its graph, and its row/column in the adjacency
    /// matrix.
    pub struct NodeIndex;

    pub struct NodeVec;
);

/// An arc as it was recorded, with its effective weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcRecord<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

/// Which cells of the matrix a neighbor query walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the node's row: the targets of its arcs.
    Outgoing,
    /// Along the node's column: the sources of arcs pointing at it.
    Incoming,
}

#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N, W> {
    nodes: NodeVec<N>,
    node_index: AHashMap<N, NodeIndex>,
    arcs: Vec<ArcRecord<N, W>>,
    adjacency: Matrix<Option<W>>,
    config: GraphConfig,
}

impl<N, W> AdjacencyGraph<N, W> {
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn fill_mode(&self) -> FillMode {
        self.config.fill_mode
    }

    pub fn is_directed(&self) -> bool {
        self.config.is_directed
    }

    pub fn is_weighed(&self) -> bool {
        self.config.is_weighed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node keys in index order.
    pub fn nodes(&self) -> &[N] {
        self.nodes.as_slice()
    }

    /// Arcs in insertion order. Undirected arcs appear once, as supplied.
    pub fn arcs(&self) -> &[ArcRecord<N, W>] {
        &self.arcs
    }

    pub fn node(&self, index: NodeIndex) -> Option<&N> {
        self.nodes.get(index)
    }

    /// Read-only view of the raw cells, `None` where there is no arc.
    pub fn adjacency(&self) -> &Matrix<Option<W>> {
        &self.adjacency
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    pub fn new(config: GraphConfig) -> Self {
        Self::with_capacity(config, 0)
    }

    pub fn with_capacity(config: GraphConfig, node_capacity: usize) -> Self {
        AdjacencyGraph {
            nodes: NodeVec::with_capacity(node_capacity),
            node_index: AHashMap::with_capacity(node_capacity),
            arcs: Vec::new(),
            adjacency: Matrix::new(),
            config,
        }
    }

    /// Builds a graph from a node list and an arc list.
    ///
    /// Arcs without a weight weigh one. Fails on the first arc that names a
    /// node missing from `nodes`.
    pub fn from_parts<I, A>(nodes: I, arcs: A, config: GraphConfig) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = N>,
        A: IntoIterator<Item = (N, N, Option<W>)>,
    {
        let nodes = nodes.into_iter();
        let mut graph = Self::with_capacity(config, nodes.size_hint().0);
        for node in nodes {
            graph.add_node(node);
        }
        for (from, to, weight) in arcs {
            graph.add_arc(&from, &to, weight.unwrap_or_else(W::one))?;
        }
        Ok(graph)
    }

    /// Appends a node and grows the matrix by one row and one column.
    ///
    /// Inserting a key twice gives it a second index; lookups by key keep
    /// resolving to the first one.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        let index = self.nodes.push(node.clone());
        self.node_index.entry(node).or_insert(index);
        self.adjacency.grow(None);
        trace!(%index, side = self.adjacency.side(), "added node");
        index
    }

    /// Records the arc `from -> to` and writes it into the matrix, mirrored
    /// when the graph is undirected. Unweighted graphs store one instead of
    /// `weight`. An existing arc between the same nodes is overwritten.
    pub fn add_arc(&mut self, from: &N, to: &N, weight: W) -> Result<(), GraphError> {
        let f = self.resolve(from)?;
        let t = self.resolve(to)?;
        let weight = if self.config.is_weighed {
            weight
        } else {
            W::one()
        };

        self.arcs.push(ArcRecord {
            from: from.clone(),
            to: to.clone(),
            weight,
        });
        self.adjacency[(f.0, t.0)] = Some(weight);
        if !self.config.is_directed {
            self.adjacency[(t.0, f.0)] = Some(weight);
        }
        trace!(from = %f, to = %t, ?weight, "added arc");
        Ok(())
    }

    pub fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.node_index.get(node).copied()
    }

    pub(crate) fn resolve(&self, node: &N) -> Result<NodeIndex, GraphError> {
        self.node_index(node)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{node:?}")))
    }

    pub fn node_exists(&self, node: &N) -> bool {
        self.node_index.contains_key(node)
    }

    pub fn arc_exists(&self, from: &N, to: &N) -> Result<bool, GraphError> {
        let f = self.resolve(from)?;
        let t = self.resolve(to)?;
        Ok(self.adjacency[(f.0, t.0)].is_some())
    }

    pub fn arc_weight(&self, from: &N, to: &N) -> Result<W, GraphError> {
        let f = self.resolve(from)?;
        let t = self.resolve(to)?;
        self.adjacency[(f.0, t.0)].ok_or_else(|| GraphError::ArcNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
    }

    /// Number of arcs leaving `node`, self-loop included.
    pub fn node_degree_out(&self, node: &N) -> Result<usize, GraphError> {
        let index = self.resolve(node)?;
        Ok(self.neighbor_indices(index, Direction::Outgoing).count())
    }

    /// Number of arcs entering `node`, self-loop included.
    pub fn node_degree_in(&self, node: &N) -> Result<usize, GraphError> {
        let index = self.resolve(node)?;
        Ok(self.neighbor_indices(index, Direction::Incoming).count())
    }

    /// In plus out degree for directed graphs. The matrix of an undirected
    /// graph is symmetric, so there the out degree already is the degree.
    pub fn node_degree(&self, node: &N) -> Result<usize, GraphError> {
        if self.config.is_directed {
            Ok(self.node_degree_in(node)? + self.node_degree_out(node)?)
        } else {
            self.node_degree_out(node)
        }
    }

    pub fn neighbors_out(&self, node: &N) -> Result<Neighbors<'_, N, W>, GraphError> {
        self.neighbors(node, Direction::Outgoing)
    }

    pub fn neighbors_in(&self, node: &N) -> Result<Neighbors<'_, N, W>, GraphError> {
        self.neighbors(node, Direction::Incoming)
    }

    /// Lazily walks the row (outgoing) or column (incoming) of `node`.
    ///
    /// The iterator is `Clone`; cloning it before use gives a fresh pass over
    /// the same neighbors.
    pub fn neighbors(
        &self,
        node: &N,
        direction: Direction,
    ) -> Result<Neighbors<'_, N, W>, GraphError> {
        let node = self.resolve(node)?;
        Ok(Neighbors {
            graph: self,
            node,
            direction,
            cursor: 0,
        })
    }

    /// Targets and weights of the arcs leaving `index`, in index order.
    pub fn successors(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, W)> + Clone + '_ {
        self.adjacency
            .row(index.0)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.map(|w| (NodeIndex(to), w)))
    }

    fn neighbor_indices(
        &self,
        index: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.adjacency.side())
            .filter(move |&other| self.cell(index, NodeIndex(other), direction).is_some())
            .map(NodeIndex)
    }

    fn cell(&self, node: NodeIndex, other: NodeIndex, direction: Direction) -> Option<W> {
        match direction {
            Direction::Outgoing => self.adjacency[(node.0, other.0)],
            Direction::Incoming => self.adjacency[(other.0, node.0)],
        }
    }

    /// A deep copy of the adjacency matrix with the fill-mode sentinel in
    /// every empty cell.
    pub fn snapshot(&self) -> Matrix<W> {
        let sentinel = self.config.fill_mode.sentinel::<W>();
        self.adjacency.map(|cell| cell.unwrap_or(sentinel))
    }

    /// Fails when the graph holds a zero-weight arc and renders missing arcs
    /// as zero.
    pub(crate) fn check_zero_sentinel(&self) -> Result<(), GraphError> {
        if self.config.fill_mode != FillMode::Zero {
            return Ok(());
        }
        for (f, row) in self.adjacency.rows().enumerate() {
            if let Some(t) = row.iter().position(|cell| cell.is_some_and(|w| w.is_zero())) {
                return Err(ConfigError::ZeroWeightArc {
                    from: format!("{:?}", self.nodes[NodeIndex(f)]),
                    to: format!("{:?}", self.nodes[NodeIndex(t)]),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Neighbor keys of one node, read from the matrix on demand.
pub struct Neighbors<'a, N, W> {
    graph: &'a AdjacencyGraph<N, W>,
    node: NodeIndex,
    direction: Direction,
    cursor: usize,
}

impl<N, W> Clone for Neighbors<'_, N, W> {
    fn clone(&self) -> Self {
        Neighbors {
            graph: self.graph,
            node: self.node,
            direction: self.direction,
            cursor: self.cursor,
        }
    }
}

impl<'a, N, W: Copy> Iterator for Neighbors<'a, N, W> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while self.cursor < graph.adjacency.side() {
            let other = self.cursor;
            self.cursor += 1;
            let cell = match self.direction {
                Direction::Outgoing => graph.adjacency[(self.node.0, other)],
                Direction::Incoming => graph.adjacency[(other, self.node.0)],
            };
            if cell.is_some() {
                return Some(&graph.nodes[NodeIndex(other)]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.adjacency.side() - self.cursor))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("No arc from {from} to {to}")]
    ArcNotFound { from: String, to: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

#[cfg(test)]
mod test_graphs;
