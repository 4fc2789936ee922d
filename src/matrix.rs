//! # Dense Square Matrices
//!
//! [`Matrix`] is the storage behind the adjacency structure of a graph and the
//! return type of the all-pairs algorithms. It is always square, it grows one
//! row and one column at a time, and it has value semantics: `clone` produces
//! a fully independent copy, so an algorithm may rewrite a cloned matrix in
//! place without ever touching the graph it came from.
//!
//! Cells are addressed as `(row, column)`. For adjacency matrices the row is
//! the source of an arc and the column its target.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    /// The empty `0 x 0` matrix.
    pub fn new() -> Self {
        Matrix { rows: Vec::new() }
    }

    /// A `side x side` matrix with every cell set to `value`.
    pub fn filled(side: usize, value: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            rows: vec![vec![value; side]; side],
        }
    }

    /// Builds a matrix from its rows.
    ///
    /// Returns `None` when the rows do not form a square.
    pub fn from_rows<R, I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let side = rows.len();
        if rows.iter().all(|row| row.len() == side) {
            Some(Matrix { rows })
        } else {
            None
        }
    }

    /// Length of one side.
    pub fn side(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(column))
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over the cells of one column, top to bottom. Empty when the
    /// column does not exist.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> + Clone + '_ {
        self.rows.iter().filter_map(move |r| r.get(column))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + Clone + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Appends one row and one column, every new cell set to `fill`.
    /// Existing cells keep their coordinates.
    pub fn grow(&mut self, fill: T)
    where
        T: Clone,
    {
        let side = self.side() + 1;
        for row in &mut self.rows {
            row.push(fill.clone());
        }
        self.rows.push(vec![fill; side]);
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    pub fn is_symmetric(&self) -> bool
    where
        T: PartialEq,
    {
        let side = self.side();
        (0..side).all(|i| (0..i).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.rows[row][column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][column]
    }
}

/// One row per line, as `[a, b, c]`.
impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self
            .rows
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{}", out)
    }
}
