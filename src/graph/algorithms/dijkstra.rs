//! # Single-Source Shortest Paths
//!
//! Dijkstra's algorithm with a linear-scan minimum instead of a priority
//! queue, which is the better fit for a dense matrix: every node is scanned
//! once per round and every round reads one full matrix row, `O(n^2)` per
//! source in total.
//!
//! Ties between candidates at the same distance go to the node with the
//! lowest index. Arc weights must be non-negative.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::graph::{AdjacencyGraph, GraphError, NodeIndex, NodeVec};
use crate::num_traits::Weight;

/// Distances and predecessor links from one source node.
///
/// Both maps hold every node of the graph, in node order. Unreachable nodes
/// sit at [`Weight::infinity`] with no predecessor. For integer weights that
/// value is `MAX`, which a real distance may also reach; use
/// [`is_reachable`](Self::is_reachable) to tell the two apart.
#[derive(Clone, Debug)]
pub struct ShortestPaths<N, W> {
    source: N,
    distance: IndexMap<N, W>,
    previous: IndexMap<N, Option<N>>,
}

impl<N: Eq + Hash + Clone, W: Weight> ShortestPaths<N, W> {
    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn distances(&self) -> &IndexMap<N, W> {
        &self.distance
    }

    pub fn previous(&self) -> &IndexMap<N, Option<N>> {
        &self.previous
    }

    pub fn distance(&self, node: &N) -> Option<W> {
        self.distance.get(node).copied()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.previous.get(node).and_then(Option::as_ref)
    }

    /// Every reached node other than the source has a predecessor.
    pub fn is_reachable(&self, node: &N) -> bool {
        *node == self.source || self.predecessor(node).is_some()
    }

    /// Nodes on the shortest path from the source to `target`, both ends
    /// included. `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Shortest distances from `source` to every node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] when `source` is not in the graph.
    pub fn dijkstra(&self, source: &N) -> Result<ShortestPaths<N, W>, GraphError> {
        let start = self.resolve(source)?;
        Ok(self.shortest_paths(start))
    }

    /// Runs [`dijkstra`](Self::dijkstra) once per distinct node, in node
    /// order.
    pub fn dijkstra_all(&self) -> Vec<ShortestPaths<N, W>> {
        self.nodes
            .iter()
            .filter(|(index, node)| self.node_index(node) == Some(*index))
            .map(|(index, _)| self.shortest_paths(index))
            .collect()
    }

    fn shortest_paths(&self, start: NodeIndex) -> ShortestPaths<N, W> {
        let source = self.nodes[start].clone();
        debug!(source = ?source, nodes = self.node_count(), "running dijkstra");

        let (distance, previous) = self.dijkstra_from(start);

        let mut paths = ShortestPaths {
            source,
            distance: IndexMap::with_capacity(self.node_count()),
            previous: IndexMap::with_capacity(self.node_count()),
        };
        for (index, node) in self.nodes.iter() {
            paths
                .distance
                .entry(node.clone())
                .or_insert_with(|| distance[index].unwrap_or_else(W::infinity));
            paths
                .previous
                .entry(node.clone())
                .or_insert_with(|| previous[index].map(|p| self.nodes[p].clone()));
        }
        paths
    }

    /// Distances are `None` until a node is reached. Relaxations whose sum
    /// does not fit in `W` are skipped.
    fn dijkstra_from(
        &self,
        start: NodeIndex,
    ) -> (NodeVec<Option<W>>, NodeVec<Option<NodeIndex>>) {
        let n = self.node_count();
        let mut distance: NodeVec<Option<W>> = vec![None; n].into();
        let mut previous: NodeVec<Option<NodeIndex>> = vec![None; n].into();
        let mut candidates: Vec<NodeIndex> = self.nodes.indices().collect();
        distance[start] = Some(W::zero());

        loop {
            // candidates stay in index order, so strict `<` keeps the lowest
            // index on ties
            let mut best: Option<(usize, W)> = None;
            for (pos, &node) in candidates.iter().enumerate() {
                let Some(d) = distance[node] else {
                    continue;
                };
                match best {
                    Some((_, closest)) if closest <= d => {}
                    _ => best = Some((pos, d)),
                }
            }
            // the rest is unreachable
            let Some((pos, reached)) = best else {
                break;
            };
            let picked = candidates.remove(pos);

            for (next, weight) in self.successors(picked) {
                let Some(candidate) = reached.checked_add(weight) else {
                    continue;
                };
                let shorter = match distance[next] {
                    Some(known) => candidate < known,
                    None => true,
                };
                if shorter {
                    distance[next] = Some(candidate);
                    previous[next] = Some(picked);
                }
            }
        }

        (distance, previous)
    }
}

#[cfg(test)]
mod test {
    use similar_asserts::assert_eq;

    use crate::graph::{
        config::{FillMode, GraphConfig},
        test_graphs::{self, DIJKSTRA_ANIMATION_SOURCES},
        AdjacencyGraph, GraphError,
    };

    #[test]
    fn animation_graph_from_each_fixture_source() {
        let graph = test_graphs::dijkstra_animation();

        for (source, distances, previous) in DIJKSTRA_ANIMATION_SOURCES {
            let paths = graph.dijkstra(&source).unwrap();
            let got_distance: Vec<(u32, f64)> =
                paths.distances().iter().map(|(&n, &d)| (n, d)).collect();
            let got_previous: Vec<(u32, Option<u32>)> =
                paths.previous().iter().map(|(&n, &p)| (n, p)).collect();

            assert_eq!(got_distance, distances.to_vec(), "distances from {source}");
            assert_eq!(got_previous, previous.to_vec(), "predecessors from {source}");
        }
    }

    #[test]
    fn animation_graph_from_node_five() {
        let graph = test_graphs::dijkstra_animation();
        let paths = graph.dijkstra(&5).unwrap();

        let distances: Vec<f64> = paths.distances().values().copied().collect();
        assert_eq!(distances, vec![20.0, 21.0, 11.0, 6.0, 0.0, 9.0]);
        let previous: Vec<Option<u32>> = paths.previous().values().copied().collect();
        assert_eq!(
            previous,
            vec![Some(3), Some(4), Some(6), Some(5), None, Some(5)]
        );
    }

    #[test]
    fn path_reconstruction() {
        let graph = test_graphs::dijkstra_animation();
        let paths = graph.dijkstra(&1).unwrap();

        assert_eq!(paths.path_to(&5), Some(vec![1, 3, 6, 5]));
        assert_eq!(paths.path_to(&1), Some(vec![1]));
        assert_eq!(paths.path_to(&42), None);
        assert_eq!(paths.source(), &1);
    }

    #[test]
    fn unreachable_nodes_stay_infinite() {
        let config = GraphConfig::new(FillMode::Infinity, true, true);
        let graph = AdjacencyGraph::from_parts(
            ["a", "b", "c", "d"],
            [("a", "b", Some(3u32)), ("c", "a", Some(1))],
            config,
        )
        .unwrap();

        let paths = graph.dijkstra(&"a").unwrap();
        assert_eq!(paths.distance(&"b"), Some(3));
        assert_eq!(paths.distance(&"c"), Some(u32::MAX));
        assert!(!paths.is_reachable(&"c"));
        assert!(!paths.is_reachable(&"d"));
        assert_eq!(paths.predecessor(&"c"), None);
        assert_eq!(paths.path_to(&"d"), None);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        // b and c are both at distance 1 from a; b is settled first and
        // claims d, c finds an equally short route and leaves it alone.
        let config = GraphConfig::new(FillMode::Zero, true, true);
        let graph = AdjacencyGraph::from_parts(
            ["a", "b", "c", "d"],
            [
                ("a", "c", Some(1u32)),
                ("a", "b", Some(1)),
                ("c", "d", Some(1)),
                ("b", "d", Some(1)),
            ],
            config,
        )
        .unwrap();

        let paths = graph.dijkstra(&"a").unwrap();
        assert_eq!(paths.distance(&"d"), Some(2));
        assert_eq!(paths.predecessor(&"d"), Some(&"b"));
    }

    #[test]
    fn unweighted_graph_counts_hops() {
        let config = GraphConfig::new(FillMode::Zero, false, false);
        let graph = AdjacencyGraph::from_parts(
            [1, 2, 3, 4],
            [(1, 2, Some(50u64)), (2, 3, Some(7)), (3, 4, None)],
            config,
        )
        .unwrap();

        let paths = graph.dijkstra(&4).unwrap();
        assert_eq!(paths.distance(&1), Some(3));
        assert_eq!(paths.path_to(&1), Some(vec![4, 3, 2, 1]));
    }

    #[test]
    fn unknown_source() {
        let graph = test_graphs::dijkstra_animation();
        assert_eq!(
            graph.dijkstra(&7).unwrap_err(),
            GraphError::NodeNotFound("7".to_string())
        );
    }

    #[test]
    fn every_source_is_at_distance_zero_from_itself() {
        let graph = test_graphs::dijkstra_animation();
        let all = graph.dijkstra_all();
        assert_eq!(all.len(), 6);
        for paths in &all {
            assert_eq!(paths.distance(paths.source()), Some(0.0));
            assert_eq!(paths.predecessor(paths.source()), None);
        }
    }

    #[test]
    fn max_weight_arc_is_still_reachable() {
        let config = GraphConfig::new(FillMode::Infinity, true, true);
        let graph = AdjacencyGraph::from_parts(
            [1, 2, 3],
            [(1, 2, Some(u32::MAX)), (2, 3, Some(1))],
            config,
        )
        .unwrap();

        let paths = graph.dijkstra(&1).unwrap();
        assert_eq!(paths.distance(&2), Some(u32::MAX));
        assert!(paths.is_reachable(&2));
        assert_eq!(paths.path_to(&2), Some(vec![1, 2]));
        // one past MAX does not fit
        assert_eq!(paths.distance(&3), Some(u32::MAX));
        assert!(!paths.is_reachable(&3));
        assert_eq!(paths.path_to(&3), None);
    }

    #[test]
    fn small_integer_sums_do_not_overflow() {
        let config = GraphConfig::new(FillMode::Infinity, false, true);
        let graph = AdjacencyGraph::from_parts(
            [1u8, 2, 3, 4],
            [(1, 2, Some(200u8)), (2, 3, Some(100)), (3, 4, Some(155))],
            config,
        )
        .unwrap();

        let from_one = graph.dijkstra(&1).unwrap();
        assert_eq!(from_one.distance(&2), Some(200));
        assert!(!from_one.is_reachable(&3));
        assert!(!from_one.is_reachable(&4));

        let from_two = graph.dijkstra(&2).unwrap();
        assert_eq!(from_two.distance(&4), Some(u8::MAX));
        assert_eq!(from_two.path_to(&4), Some(vec![2, 3, 4]));
    }

    #[test]
    fn zero_weight_arcs_are_followed() {
        let config = GraphConfig::new(FillMode::Zero, true, true);
        let graph = AdjacencyGraph::from_parts(
            ["a", "b", "c"],
            [("a", "b", Some(0i16)), ("b", "c", Some(5)), ("a", "c", Some(6))],
            config,
        )
        .unwrap();

        let paths = graph.dijkstra(&"a").unwrap();
        assert_eq!(paths.distance(&"b"), Some(0));
        assert_eq!(paths.predecessor(&"b"), Some(&"a"));
        assert_eq!(paths.distance(&"c"), Some(5));
        assert_eq!(paths.path_to(&"c"), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn single_node_graph() {
        let mut graph = AdjacencyGraph::<&str, f64>::new(GraphConfig::default());
        graph.add_node("only");
        let paths = graph.dijkstra(&"only").unwrap();
        assert_eq!(paths.distances().len(), 1);
        assert_eq!(paths.distance(&"only"), Some(0.0));
    }

    #[test]
    fn empty_graph_runs_from_no_source() {
        let graph = AdjacencyGraph::<&str, f64>::new(GraphConfig::default());
        assert!(graph.dijkstra_all().is_empty());
    }
}
