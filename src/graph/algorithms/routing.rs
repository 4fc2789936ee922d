//! # All-Pairs Routing Distances
//!
//! Floyd–Warshall accumulating distances instead of booleans: for every
//! intermediate node `k` and every pair `i != j`, a route `i -> k -> j` whose
//! two legs are both known replaces the stored distance when there is none
//! yet or when it is strictly shorter.
//!
//! The diagonal is never rewritten; it keeps the weight of the node's
//! self-loop, if any. Distances are tracked as `Option<W>` so that "unknown"
//! never collides with a real distance during the computation. A route whose
//! length does not fit in `W` is never recorded.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::graph::{AdjacencyGraph, GraphError};
use crate::matrix::Matrix;
use crate::num_traits::Weight;

/// Relaxes `dist` in place; `None` marks a pair with no known route.
fn relax_all_pairs<W: Weight>(dist: &mut Matrix<Option<W>>) {
    let n = dist.side();
    for k in 0..n {
        for i in 0..n {
            let Some(to_k) = dist[(i, k)] else {
                continue;
            };
            for j in 0..n {
                if i == j {
                    continue;
                }
                let Some(from_k) = dist[(k, j)] else {
                    continue;
                };
                let Some(through_k) = to_k.checked_add(from_k) else {
                    continue;
                };
                match dist[(i, j)] {
                    Some(known) if known <= through_k => {}
                    _ => dist[(i, j)] = Some(through_k),
                }
            }
        }
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Shortest known distance between every ordered pair of nodes, `None`
    /// where no route exists.
    pub fn routing_distances(&self) -> Matrix<Option<W>> {
        debug!(nodes = self.node_count(), "computing routing distances");
        let mut dist = self.adjacency().clone();
        relax_all_pairs(&mut dist);
        dist
    }

    /// [`routing_distances`](Self::routing_distances) rendered with the
    /// graph's fill-mode sentinel for unreachable pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfiguration`] when the graph uses the
    /// zero fill mode and holds a zero-weight arc, since a zero in the result
    /// would then mean both "no route" and "free route".
    pub fn shortest_path_routing(&self) -> Result<Matrix<W>, GraphError> {
        self.check_zero_sentinel()?;
        let sentinel = self.fill_mode().sentinel::<W>();
        Ok(self
            .routing_distances()
            .map(|cell| cell.unwrap_or(sentinel)))
    }
}
