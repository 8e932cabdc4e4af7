use crate::check_threshold;
use crate::distance::iou_distance;
use crate::matching::match_by_cost;
use crate::utils::bbox::BoundingBox;
use anyhow::Result;
use log::debug;
use rayon::prelude::*;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Default IoU distance beyond which a predicted box doesn't detect a ground truth box
pub const DEFAULT_MODA_IOU_THRESHOLD: f32 = 0.5;

/// Error counts of detections against the ground truth
///
/// Scores of disjoint frames are combined with `+`; the operation is associative and commutative
/// with [`Moda::default`] as the identity, so per-frame scores may be reduced in any order.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Moda {
    pub false_negatives: usize,
    pub false_positives: usize,
    pub n_truth: usize,
}

impl Moda {
    pub fn new(false_negatives: usize, false_positives: usize, n_truth: usize) -> Self {
        Self {
            false_negatives,
            false_positives,
            n_truth,
        }
    }

    /// `1 - (false_negatives + false_positives) / n_truth`, or `0` without ground truth boxes
    ///
    /// The value is negative when there are more errors than ground truth boxes.
    ///
    pub fn value(&self) -> f32 {
        if self.n_truth == 0 {
            return 0.0;
        }
        let n_errors = self.false_negatives + self.false_positives;
        1.0 - n_errors as f32 / self.n_truth as f32
    }
}

impl Add for Moda {
    type Output = Moda;

    fn add(self, other: Moda) -> Moda {
        Moda {
            false_negatives: self.false_negatives + other.false_negatives,
            false_positives: self.false_positives + other.false_positives,
            n_truth: self.n_truth + other.n_truth,
        }
    }
}

impl AddAssign for Moda {
    fn add_assign(&mut self, other: Moda) {
        *self = *self + other;
    }
}

impl Sum for Moda {
    fn sum<I: Iterator<Item = Moda>>(iter: I) -> Moda {
        iter.fold(Moda::default(), Add::add)
    }
}

impl<'a> Sum<&'a Moda> for Moda {
    fn sum<I: Iterator<Item = &'a Moda>>(iter: I) -> Moda {
        iter.copied().sum()
    }
}

/// Scores predicted boxes of a frame against its ground truth boxes
///
/// Predicted and ground truth boxes are matched by the optimal assignment over [`iou_distance`];
/// assigned pairs with the distance greater than `iou_threshold` don't count as detections.
/// Unmatched predictions are false positives, unmatched ground truth boxes are false negatives.
///
/// # Parameters
/// * `predicted` - detected boxes
/// * `ground_truth` - true boxes
/// * `iou_threshold` - the maximal IoU distance of a detection, [`DEFAULT_MODA_IOU_THRESHOLD`] usually
///
pub fn compute_moda(
    predicted: &[BoundingBox],
    ground_truth: &[BoundingBox],
    iou_threshold: f32,
) -> Result<Moda> {
    check_threshold(iou_threshold)?;

    let moda = if predicted.is_empty() {
        Moda::new(ground_truth.len(), 0, ground_truth.len())
    } else if ground_truth.is_empty() {
        Moda::new(0, predicted.len(), 0)
    } else {
        let res = match_by_cost(predicted, ground_truth, iou_distance, iou_threshold);
        Moda::new(
            res.unmatched_right.len(),
            res.unmatched_left.len(),
            ground_truth.len(),
        )
    };

    debug!(
        "MODA for {} predicted, {} true boxes: {:?}",
        predicted.len(),
        ground_truth.len(),
        &moda
    );

    Ok(moda)
}

/// Scores a sequence of `(predicted, ground_truth)` frames
///
/// Frames are evaluated in parallel and their scores are summed.
///
pub fn compute_sequence_moda<P, G>(frames: &[(P, G)], iou_threshold: f32) -> Result<Moda>
where
    P: AsRef<[BoundingBox]> + Sync,
    G: AsRef<[BoundingBox]> + Sync,
{
    check_threshold(iou_threshold)?;
    frames
        .par_iter()
        .map(|(predicted, ground_truth)| {
            compute_moda(predicted.as_ref(), ground_truth.as_ref(), iou_threshold)
        })
        .try_reduce(Moda::default, |a, b| Ok(a + b))
}
