use crate::utils::bbox::BoundingBox;

/// IoU distance between two boxes: `1 - intersection / union`
///
/// When the union area is zero (both boxes are degenerate) the IoU is undefined and the maximal
/// distance `1` is returned, so such pairs never match under a threshold below `1`.
///
pub fn iou_distance(l: &BoundingBox, r: &BoundingBox) -> f32 {
    BoundingBox::iou(l, r).map(|iou| 1.0 - iou).unwrap_or(1.0)
}

/// Euclidian distance between the raw `(x1, y1, x2, y2)` vectors of two boxes
///
/// Note that it is not the distance between box centers: both corners contribute.
///
pub fn center_distance(l: &BoundingBox, r: &BoundingBox) -> f32 {
    l.as_array()
        .iter()
        .zip(r.as_array().iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use crate::distance::{center_distance, iou_distance};
    use crate::utils::bbox::BoundingBox;
    use crate::EPS;

    #[test]
    fn center_distances() {
        let b1 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b2 = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
        assert!(center_distance(&b1, &b1).abs() < EPS);
        assert!((center_distance(&b1, &b2) - 2.0).abs() < EPS);
        assert!((center_distance(&b2, &b1) - 2.0).abs() < EPS);

        // same center, different corners
        let b3 = BoundingBox::new(-1.0, -1.0, 2.0, 2.0);
        let b4 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!((center_distance(&b3, &b4) - 2.0).abs() < EPS);
    }

    #[test]
    fn iou_distances() {
        let b1 = BoundingBox::new(0.0, 0.0, 2.0, 1.0);
        let b2 = BoundingBox::new(1.0, 0.0, 3.0, 1.0);
        let b3 = BoundingBox::new(5.0, 5.0, 6.0, 6.0);
        assert!(iou_distance(&b1, &b1).abs() < EPS);
        assert!((iou_distance(&b1, &b2) - 2.0 / 3.0).abs() < EPS);
        assert!((iou_distance(&b1, &b3) - 1.0).abs() < EPS);
    }

    #[test]
    fn degenerate_iou_distance() {
        let point = BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(iou_distance(&point, &point), 1.0);
    }
}
