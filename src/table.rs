use pathfinding::matrix::Matrix;
use std::ops::Index;

/// The edit distance between every subtree of one tree and every subtree of another.
///
/// The entry at `(i, j)` is the distance from the subtree rooted at the node with postorder index
/// `i` in the first tree to the subtree rooted at the node with postorder index `j` in the second.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable(Matrix<f64>);

impl DistanceTable {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        DistanceTable(Matrix::new(rows, columns, 0.))
    }

    /// The distance between the two whole trees.
    #[inline]
    pub fn distance(&self) -> f64 {
        self[(self.rows() - 1, self.columns() - 1)]
    }

    /// The distance between the subtrees rooted at `i` and `j`, if both exist.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    /// The number of nodes in the first tree.
    #[inline]
    pub fn rows(&self) -> usize {
        self.0.rows
    }

    /// The number of nodes in the second tree.
    #[inline]
    pub fn columns(&self) -> usize {
        self.0.columns
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, d: f64) {
        self.0[(i, j)] = d;
    }
}

impl Index<(usize, usize)> for DistanceTable {
    type Output = f64;

    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_table_between_single_nodes_holds_a_single_distance() {
        let mut table = DistanceTable::new(1, 1);
        assert_eq!(table.distance(), 0.);

        table.set(0, 0, 2.);
        assert_eq!(table.distance(), 2.);
        assert_eq!(table.get(0, 0), Some(2.));
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(1, 0), None);
    }
}
