use crate::utils::linear_sum_assignment::linear_sum_assignment;
use log::{debug, trace};
use pathfinding::matrix::Matrix;

/// Result of matching two sets of items
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Accepted `(left, right)` pairs ordered by the left index
    pub matched: Vec<(usize, usize)>,
    /// Left indices without an accepted pair, ascending
    pub unmatched_left: Vec<usize>,
    /// Right indices without an accepted pair, ascending
    pub unmatched_right: Vec<usize>,
}

/// Builds the `left.len() x right.len()` matrix of pairwise costs
///
/// The matrix is `0 x 0` when either side is empty.
///
pub fn cost_matrix<L, R, F>(left: &[L], right: &[R], cost: F) -> Matrix<f32>
where
    F: Fn(&L, &R) -> f32,
{
    if left.is_empty() || right.is_empty() {
        return Matrix::new(0, 0, 0.0);
    }

    let mut m = Matrix::new(left.len(), right.len(), 0.0f32);
    for (i, l) in left.iter().enumerate() {
        for (j, r) in right.iter().enumerate() {
            m[(i, j)] = cost(l, r);
        }
    }
    m
}

/// Collects the positions not marked in `marks`
///
fn unmarked(marks: &[bool]) -> Vec<usize> {
    marks
        .iter()
        .enumerate()
        .filter(|(_, m)| !**m)
        .map(|(i, _)| i)
        .collect()
}

/// Matches `left` against `right` with the optimal assignment over `cost`
///
/// Assigned pairs with the cost greater than `threshold` are discarded, so both of their indices
/// become unmatched. When either side is empty the solver is not invoked.
///
pub fn match_by_cost<L, R, F>(left: &[L], right: &[R], cost: F, threshold: f32) -> MatchResult
where
    F: Fn(&L, &R) -> f32,
{
    if left.is_empty() || right.is_empty() {
        return MatchResult {
            matched: Vec::default(),
            unmatched_left: (0..left.len()).collect(),
            unmatched_right: (0..right.len()).collect(),
        };
    }

    let costs = cost_matrix(left, right, cost);
    trace!("Cost matrix: {:?}", &costs);

    let mut left_marks = vec![false; left.len()];
    let mut right_marks = vec![false; right.len()];

    let matched = linear_sum_assignment(&costs)
        .into_iter()
        .filter(|&(l, r)| costs[(l, r)] <= threshold)
        .inspect(|&(l, r)| {
            left_marks[l] = true;
            right_marks[r] = true;
        })
        .collect::<Vec<_>>();

    debug!(
        "Matched {} pairs for {}x{} cost matrix with threshold {}",
        matched.len(),
        left.len(),
        right.len(),
        threshold
    );

    MatchResult {
        matched,
        unmatched_left: unmarked(&left_marks),
        unmatched_right: unmarked(&right_marks),
    }
}
