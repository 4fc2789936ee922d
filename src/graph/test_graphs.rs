//! Golden data sets: small graphs with known adjacency matrices, closures,
//! routing tables and shortest paths.

use super::{
    config::{FillMode, GraphConfig},
    AdjacencyGraph,
};
use crate::matrix::Matrix;

pub fn matrix<T, const S: usize>(rows: [[T; S]; S]) -> Matrix<T> {
    Matrix::from_rows(rows).expect("array rows are square")
}

pub fn bits(closure: &Matrix<bool>) -> Matrix<u8> {
    closure.map(|&b| u8::from(b))
}

/// Undirected, weighted, with a self-loop on node 1.
pub fn square() -> AdjacencyGraph<u32, u32> {
    AdjacencyGraph::from_parts(
        [1, 2, 3, 4],
        [
            (1, 2, Some(7)),
            (1, 1, Some(2)),
            (2, 3, Some(14)),
            (3, 4, Some(2)),
            (4, 1, Some(32)),
        ],
        GraphConfig::new(FillMode::Zero, false, true),
    )
    .unwrap()
}

pub const SQUARE_ADJACENCY: [[u32; 4]; 4] =
    [[2, 7, 0, 32], [7, 0, 14, 0], [0, 14, 0, 2], [32, 0, 2, 0]];

fn unweighted_digraph(nodes: &[u32], arcs: &[(u32, u32)]) -> AdjacencyGraph<u32, u32> {
    AdjacencyGraph::from_parts(
        nodes.iter().copied(),
        arcs.iter().map(|&(from, to)| (from, to, None)),
        GraphConfig::new(FillMode::Zero, true, false),
    )
    .unwrap()
}

/// Pitt CS0441, lecture 27 (closures).
pub fn warshall_lecture() -> AdjacencyGraph<u32, u32> {
    unweighted_digraph(&[1, 2, 3], &[(1, 1), (1, 3), (2, 2), (3, 1), (3, 2)])
}

pub const WARSHALL_LECTURE_CLOSURE: [[u8; 3]; 3] = [[1, 1, 1], [0, 1, 0], [1, 1, 1]];

/// Dartmouth discrete maths notes, V.6. The published result misses the
/// `3 -> 4` route through node 1; it is set here.
pub fn warshall_dartmouth() -> AdjacencyGraph<u32, u32> {
    unweighted_digraph(&[1, 2, 3, 4], &[(1, 2), (1, 4), (2, 1), (2, 3), (3, 1)])
}

pub const WARSHALL_DARTMOUTH_CLOSURE: [[u8; 4]; 4] =
    [[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [0, 0, 0, 0]];

/// UQAM INF1130, "fermeture de matrices".
pub fn warshall_uqam() -> AdjacencyGraph<u32, u32> {
    unweighted_digraph(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (1, 4), (3, 2), (3, 5), (4, 6), (5, 3), (5, 4)],
    )
}

pub const WARSHALL_UQAM_CLOSURE: [[u8; 6]; 6] = [
    [0, 1, 0, 1, 0, 1],
    [0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 1],
    [0, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0],
];

/// The graph of the Wikipedia Dijkstra animation.
pub fn dijkstra_animation() -> AdjacencyGraph<u32, f64> {
    AdjacencyGraph::from_parts(
        [1, 2, 3, 4, 5, 6],
        [
            (1, 2, Some(7.0)),
            (2, 4, Some(15.0)),
            (4, 5, Some(6.0)),
            (5, 6, Some(9.0)),
            (6, 1, Some(14.0)),
            (1, 3, Some(9.0)),
            (2, 3, Some(10.0)),
            (4, 3, Some(11.0)),
            (6, 3, Some(2.0)),
        ],
        GraphConfig::new(FillMode::Infinity, false, true),
    )
    .unwrap()
}

type DijkstraExpectation = (u32, [(u32, f64); 6], [(u32, Option<u32>); 6]);

pub const DIJKSTRA_ANIMATION_SOURCES: [DijkstraExpectation; 2] = [
    (
        1,
        [(1, 0.0), (2, 7.0), (3, 9.0), (4, 20.0), (5, 20.0), (6, 11.0)],
        [
            (1, None),
            (2, Some(1)),
            (3, Some(1)),
            (4, Some(3)),
            (5, Some(6)),
            (6, Some(3)),
        ],
    ),
    (
        3,
        [(1, 9.0), (2, 10.0), (3, 0.0), (4, 11.0), (5, 11.0), (6, 2.0)],
        [
            (1, Some(3)),
            (2, Some(3)),
            (3, None),
            (4, Some(3)),
            (5, Some(6)),
            (6, Some(3)),
        ],
    ),
];

/// Five /24 networks joined by weighted links.
pub fn subnets() -> AdjacencyGraph<&'static str, u32> {
    AdjacencyGraph::from_parts(
        [
            "10.0.1.0/24",
            "10.0.2.0/24",
            "10.0.3.0/24",
            "10.0.4.0/24",
            "10.0.5.0/24",
        ],
        [
            ("10.0.1.0/24", "10.0.2.0/24", Some(10)),
            ("10.0.1.0/24", "10.0.4.0/24", Some(5)),
            ("10.0.2.0/24", "10.0.3.0/24", Some(5)),
            ("10.0.2.0/24", "10.0.4.0/24", Some(5)),
            ("10.0.2.0/24", "10.0.5.0/24", Some(10)),
            ("10.0.4.0/24", "10.0.5.0/24", Some(20)),
        ],
        GraphConfig::new(FillMode::Zero, false, true),
    )
    .unwrap()
}

pub const SUBNETS_ROUTES: [[u32; 5]; 5] = [
    [0, 10, 15, 5, 20],
    [10, 0, 5, 5, 10],
    [15, 5, 0, 10, 15],
    [5, 5, 10, 0, 15],
    [20, 10, 15, 15, 0],
];
