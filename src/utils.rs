/// Bounding boxes
pub mod bbox;

/// Optimal assignment over a cost matrix
pub mod linear_sum_assignment;
