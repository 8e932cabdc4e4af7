use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

/// Costs are converted to integer weights with the multiplier; the solver works on `i64`
const F32_I64_MULT: f64 = 1_000_000.0;

/// Costs are clamped to the range to keep the weight sums far from `i64` overflow
const MAX_COST: f64 = 1_000_000_000.0;

fn weight(cost: f32) -> i64 {
    let cost = if cost.is_nan() {
        MAX_COST
    } else {
        (cost as f64).clamp(-MAX_COST, MAX_COST)
    };
    // the solver maximizes the total weight
    -(cost * F32_I64_MULT) as i64
}

/// Minimum total cost one-to-one assignment for a rectangular cost matrix
///
/// Returns `min(rows, columns)` pairs `(row, column)` ordered by row. The smaller side of the
/// matrix is always handed to the solver as rows, so among equal-cost solutions the one chosen by
/// `kuhn_munkres` for that orientation wins.
///
pub fn linear_sum_assignment(cost: &Matrix<f32>) -> Vec<(usize, usize)> {
    let (rows, columns) = (cost.rows, cost.columns);
    if rows == 0 || columns == 0 {
        return Vec::default();
    }

    let transposed = rows > columns;
    let (w_rows, w_columns) = if transposed {
        (columns, rows)
    } else {
        (rows, columns)
    };

    let mut weights = Matrix::new(w_rows, w_columns, 0i64);
    for r in 0..rows {
        for c in 0..columns {
            let w = weight(cost[(r, c)]);
            if transposed {
                weights[(c, r)] = w;
            } else {
                weights[(r, c)] = w;
            }
        }
    }

    let (_, solution) = kuhn_munkres(&weights);

    let mut pairs = solution
        .into_iter()
        .enumerate()
        .map(|(r, c)| if transposed { (c, r) } else { (r, c) })
        .collect::<Vec<_>>();
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use crate::utils::linear_sum_assignment::linear_sum_assignment;
    use pathfinding::matrix::Matrix;

    fn matrix(rows: usize, columns: usize, values: &[f32]) -> Matrix<f32> {
        Matrix::from_vec(rows, columns, values.to_vec()).unwrap()
    }

    #[test]
    fn square() {
        let cost = matrix(3, 3, &[4.0, 1.0, 3.0, 2.0, 0.0, 5.0, 3.0, 2.0, 2.0]);
        assert_eq!(linear_sum_assignment(&cost), vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn more_rows_than_columns() {
        let cost = matrix(3, 2, &[0.5, 3.0, 0.6, 3.5, 0.7, 2.0]);
        assert_eq!(linear_sum_assignment(&cost), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn more_columns_than_rows() {
        let cost = matrix(2, 4, &[0.5, 2.0, 1.5, 3.0, 1.8, 0.6, 2.5, 2.2]);
        assert_eq!(linear_sum_assignment(&cost), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn optimal_not_greedy() {
        // greedy picks (0, 0) first and ends up with 1 + 10
        let cost = matrix(2, 2, &[1.0, 2.0, 2.0, 10.0]);
        assert_eq!(linear_sum_assignment(&cost), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn empty() {
        assert!(linear_sum_assignment(&Matrix::new(0, 3, 0.0f32)).is_empty());
        assert!(linear_sum_assignment(&Matrix::new(0, 0, 0.0f32)).is_empty());
    }

    #[test]
    fn non_finite() {
        let cost = matrix(2, 2, &[f32::NAN, 1.0, 1.0, f32::INFINITY]);
        assert_eq!(linear_sum_assignment(&cost), vec![(0, 1), (1, 0)]);
    }
}
