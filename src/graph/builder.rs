use std::fmt::Debug;
use std::hash::Hash;

use super::{config::GraphConfig, AdjacencyGraph, GraphError};
use crate::num_traits::Weight;

/// Collects node and arc lists before committing to a [`GraphConfig`].
///
/// Nothing is validated until [`build`](GraphBuilder::build), so arcs may be
/// added before the nodes they reference.
#[derive(Clone, Debug)]
pub struct GraphBuilder<N, W> {
    nodes: Vec<N>,
    arcs: Vec<(N, N, Option<W>)>,
}

impl<N, W> GraphBuilder<N, W> {
    pub fn new() -> Self {
        GraphBuilder {
            nodes: Vec::new(),
            arcs: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }

    /// An arc of weight one.
    pub fn add_arc(&mut self, from: N, to: N) -> &mut Self {
        self.arcs.push((from, to, None));
        self
    }

    pub fn add_weighted_arc(&mut self, from: N, to: N, weight: W) -> &mut Self {
        self.arcs.push((from, to, Some(weight)));
        self
    }

    pub fn build(self, config: GraphConfig) -> Result<AdjacencyGraph<N, W>, GraphError>
    where
        N: Clone + Eq + Hash + Debug,
        W: Weight,
    {
        AdjacencyGraph::from_parts(self.nodes, self.arcs, config)
    }
}

impl<N, W> Default for GraphBuilder<N, W> {
    fn default() -> Self {
        Self::new()
    }
}
