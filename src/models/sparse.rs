/// A sparse row: `(feature index, value)` pairs in ascending index order
pub type SparseRow = Vec<(usize, f64)>;

/// Dot product of a sparse row with a dense weight vector
pub fn dot(row: &[(usize, f64)], weights: &[f64]) -> f64 {
    row.iter()
        .filter_map(|&(j, x)| weights.get(j).map(|w| w * x))
        .sum()
}

/// Scale a row to unit L2 norm; all-zero rows are left alone
pub fn l2_normalize(row: &mut [(usize, f64)]) {
    let norm = row.iter().map(|(_, x)| x * x).sum::<f64>().sqrt();

    if norm > 0.0 {
        for (_, x) in row.iter_mut() {
            *x /= norm;
        }
    }
}

/// Transpose rows into per-feature columns of `(row index, value)` pairs
pub fn to_columns(rows: &[SparseRow], n_features: usize) -> Vec<Vec<(usize, f64)>> {
    let mut columns = vec![Vec::new(); n_features];

    for (i, row) in rows.iter().enumerate() {
        for &(j, x) in row {
            columns[j].push((i, x));
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalizes_to_unit_length() {
        let mut row = vec![(0, 3.0), (4, 4.0)];
        l2_normalize(&mut row);

        assert_eq!(row, vec![(0, 0.6), (4, 0.8)]);
        assert_eq!(dot(&row, &[1.0, 0.0, 0.0, 0.0, 1.0]), 1.4);
    }

    #[test]
    fn transposes_rows() {
        let rows = vec![vec![(1, 2.0)], vec![(0, 1.0), (1, 3.0)]];

        assert_eq!(
            to_columns(&rows, 2),
            vec![vec![(1, 1.0)], vec![(0, 2.0), (1, 3.0)]]
        );
    }
}
