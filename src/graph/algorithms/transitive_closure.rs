//! # Transitive Closure
//!
//! Warshall's boolean variant of Floyd–Warshall. The adjacency snapshot is
//! flattened to booleans once, up front (any arc, whatever its weight or
//! direction handling, becomes `true`), then closed under
//! `c[i][j] |= c[i][k] && c[k][j]` for every intermediate node `k`.
//!
//! The result is a fresh matrix: cell `(i, j)` is `true` iff node `i` reaches
//! node `j` through one or more arcs. A node only reaches itself through a
//! self-loop or a cycle. Closing an already closed matrix changes nothing.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::graph::{AdjacencyGraph, GraphError};
use crate::matrix::Matrix;
use crate::num_traits::Weight;

/// Closes `reach` in place under transitivity and returns it.
///
/// Runs in `O(n^3)` time for an `n x n` matrix.
pub fn warshall(mut reach: Matrix<bool>) -> Matrix<bool> {
    let n = reach.side();
    for k in 0..n {
        for i in 0..n {
            if !reach[(i, k)] {
                continue;
            }
            for j in 0..n {
                if reach[(k, j)] {
                    reach[(i, j)] = true;
                }
            }
        }
    }
    reach
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Boolean reachability matrix of the graph.
    ///
    /// The graph is left untouched; the closure is computed on a copy of its
    /// adjacency matrix.
    pub fn transitive_closure(&self) -> Matrix<bool> {
        debug!(nodes = self.node_count(), "computing transitive closure");
        warshall(self.adjacency().map(Option::is_some))
    }

    /// Whether a path of at least one arc leads from `from` to `to`.
    ///
    /// Computes the whole closure; prefer [`transitive_closure`](Self::transitive_closure)
    /// when asking about many pairs.
    pub fn reaches(&self, from: &N, to: &N) -> Result<bool, GraphError> {
        let f = self.resolve(from)?;
        let t = self.resolve(to)?;
        Ok(self.transitive_closure()[(f.0, t.0)])
    }
}
