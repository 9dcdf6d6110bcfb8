//! Column-wise ranks and order statistics
//!
//! Ranks are zero-based: the smallest value of a column has rank 0 and the
//! largest has rank `n_sim - 1`. Tied values share a rank chosen by `TieBreak`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Rank assigned to a group of tied values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Smallest rank of the group (number of strictly smaller values)
    Min,
    /// Largest rank of the group (number of values <= v, minus one)
    Max,
}

impl TieBreak {
    /// Rank of `value` within an ascending-sorted sample that contains it
    fn rank_in(&self, sorted: &[f64], value: f64) -> usize {
        match self {
            TieBreak::Min => sorted.partition_point(|x| x.total_cmp(&value).is_lt()),
            TieBreak::Max => sorted
                .partition_point(|x| x.total_cmp(&value).is_le())
                .saturating_sub(1),
        }
    }
}

fn sorted_values(column: ArrayView1<'_, f64>) -> Vec<f64> {
    let mut values = column.to_vec();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Rank every column of `matrix` independently.
pub fn rank_columns(matrix: ArrayView2<'_, f64>, ties: TieBreak) -> Array2<usize> {
    let mut ranks = Array2::<usize>::zeros(matrix.raw_dim());

    for (column, mut out) in matrix.axis_iter(Axis(1)).zip(ranks.axis_iter_mut(Axis(1))) {
        let sorted = sorted_values(column);
        for (&value, rank) in column.iter().zip(out.iter_mut()) {
            *rank = ties.rank_in(&sorted, value);
        }
    }

    ranks
}

/// Copy of `matrix` with every column sorted ascending
pub fn sort_columns(matrix: ArrayView2<'_, f64>) -> Array2<f64> {
    let mut sorted = matrix.to_owned();
    for mut column in sorted.axis_iter_mut(Axis(1)) {
        let values = sorted_values(column.view());
        column.assign(&Array1::from(values));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_ranks_without_ties() {
        let m = array![[0.3, 2.0], [0.1, 1.0], [0.2, 3.0]];
        let ranks = rank_columns(m.view(), TieBreak::Min);
        assert_eq!(ranks, array![[2, 1], [0, 0], [1, 2]]);
        assert_eq!(rank_columns(m.view(), TieBreak::Max), ranks);
    }

    #[test]
    fn test_ranks_with_ties() {
        let m = array![[0.5], [0.2], [0.5], [0.5], [0.9]];
        assert_eq!(
            rank_columns(m.view(), TieBreak::Min).column(0).to_vec(),
            vec![1, 0, 1, 1, 4]
        );
        assert_eq!(
            rank_columns(m.view(), TieBreak::Max).column(0).to_vec(),
            vec![3, 0, 3, 3, 4]
        );
    }

    #[test]
    fn test_constant_column() {
        let m = Array2::<f64>::zeros((4, 1));
        assert!(rank_columns(m.view(), TieBreak::Min).iter().all(|&r| r == 0));
        assert!(rank_columns(m.view(), TieBreak::Max).iter().all(|&r| r == 3));
    }

    #[test]
    fn test_sort_columns() {
        let m = array![[3.0, -1.0], [1.0, 5.0], [2.0, 0.0]];
        let sorted = sort_columns(m.view());
        assert_eq!(sorted, array![[1.0, -1.0], [2.0, 0.0], [3.0, 5.0]]);
        // input untouched
        assert_eq!(m[[0, 0]], 3.0);
    }
}
