//! # Tracky
//!
//! Associates per-frame object detections into persistent tracklets and scores detections
//! against ground truth with the MODA metric.
//!
//! Both functions are built on the same primitive: a pairwise cost matrix between two box sets,
//! an optimal one-to-one assignment and a threshold deciding which assigned pairs are matches.
//!
//! ```rust
//! use tracky::prelude::*;
//!
//! let mut tracker = Tracker::new(f32::INFINITY).unwrap();
//! tracker.track(&[BoundingBox::new(0.0, 0.0, 1.0, 1.0)]).unwrap();
//! tracker.track(&[BoundingBox::new(1.0, 1.0, 2.0, 2.0)]).unwrap();
//! assert_eq!(tracker.tracklets().len(), 1);
//!
//! let truth = [BoundingBox::new(0.0, 0.0, 1.0, 1.0)];
//! let moda = compute_moda(&truth, &truth, DEFAULT_MODA_IOU_THRESHOLD).unwrap();
//! assert_eq!(moda.value(), 1.0);
//! ```

use thiserror::Error;

/// Cost functions between boxes
pub mod distance;

/// Frame matcher: cost matrix, optimal assignment and threshold filtering
pub mod matching;

/// Detection quality metrics
pub mod metrics;

/// Frequently used types
pub mod prelude;

/// Tracker and tracklets
pub mod trackers;

/// Geometry and assignment utilities
pub mod utils;

/// Synthetic box generators for demos, benchmarks and tests
pub mod examples;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Errors {
    #[error("Box must have {expected} coordinates, got {got}.")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Threshold must be a non-negative number, got {0}.")]
    InvalidThreshold(f32),
    #[error("Union area of the boxes is zero - IoU is undefined.")]
    DegenerateUnion,
    #[error("Tracklet has no boxes.")]
    EmptyTracklet,
}

pub(crate) const EPS: f32 = 0.00001;

/// Approximate equality for floating point based objects
pub trait EstimateClose {
    fn almost_same(&self, other: &Self, eps: f32) -> bool;
}

pub(crate) fn check_threshold(threshold: f32) -> anyhow::Result<f32> {
    if threshold.is_nan() || threshold < 0.0 {
        Err(Errors::InvalidThreshold(threshold).into())
    } else {
        Ok(threshold)
    }
}

#[cfg(test)]
mod tests {
    use crate::{check_threshold, Errors};

    #[test]
    fn thresholds() {
        assert_eq!(check_threshold(0.0).unwrap(), 0.0);
        assert_eq!(check_threshold(f32::INFINITY).unwrap(), f32::INFINITY);

        let err = check_threshold(-0.1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Errors>(),
            Some(&Errors::InvalidThreshold(-0.1))
        );
        assert!(check_threshold(f32::NAN).is_err());
    }
}
