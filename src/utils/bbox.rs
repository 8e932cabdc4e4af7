use crate::Errors::{DegenerateUnion, DimensionMismatch};
use crate::{EstimateClose, EPS};
use anyhow::Result;

/// The number of coordinates describing a box
pub const BOX_DIM: usize = 4;

/// Axis-aligned bounding box in the format (x1, y1, x2, y2)
///
/// The box is expected to satisfy `x1 <= x2` and `y1 <= y2`; malformed boxes are not rejected.
///
#[derive(Clone, Default, Debug, Copy)]
pub struct BoundingBox {
    _x1: f32,
    _y1: f32,
    _x2: f32,
    _y2: f32,
}

impl BoundingBox {
    /// Constructor
    ///
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            _x1: x1,
            _y1: y1,
            _x2: x2,
            _y2: y2,
        }
    }

    /// Constructor from the left-top corner and the dimensions
    ///
    pub fn ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn x1(&self) -> f32 {
        self._x1
    }

    pub fn y1(&self) -> f32 {
        self._y1
    }

    pub fn x2(&self) -> f32 {
        self._x2
    }

    pub fn y2(&self) -> f32 {
        self._y2
    }

    pub fn width(&self) -> f32 {
        self._x2 - self._x1
    }

    pub fn height(&self) -> f32 {
        self._y2 - self._y1
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn as_array(&self) -> [f32; BOX_DIM] {
        [self._x1, self._y1, self._x2, self._y2]
    }

    /// Coordinates rounded to `precision` decimal places
    ///
    pub fn rounded(&self, precision: u32) -> [f32; BOX_DIM] {
        let scale = 10.0_f64.powi(precision as i32);
        self.as_array()
            .map(|c| ((c as f64 * scale).round() / scale) as f32)
    }

    /// Area of the overlapping region, `0` when the boxes don't overlap
    ///
    pub fn intersection(l: &BoundingBox, r: &BoundingBox) -> f32 {
        let (x1, y1) = (l._x1.max(r._x1), l._y1.max(r._y1));
        let (x2, y2) = (l._x2.min(r._x2), l._y2.min(r._y2));

        let int_width = x2 - x1;
        let int_height = y2 - y1;

        if int_width > 0.0 && int_height > 0.0 {
            int_width * int_height
        } else {
            0.0
        }
    }

    /// Intersection over union
    ///
    /// Fails with [`DegenerateUnion`](crate::Errors::DegenerateUnion) when the union area is not
    /// positive, which happens for two zero-area boxes.
    ///
    pub fn iou(l: &BoundingBox, r: &BoundingBox) -> Result<f32> {
        let intersection = BoundingBox::intersection(l, r);
        let union = l.area() + r.area() - intersection;
        if union <= 0.0 {
            return Err(DegenerateUnion.into());
        }
        Ok(intersection / union)
    }
}

impl From<[f32; BOX_DIM]> for BoundingBox {
    fn from(c: [f32; BOX_DIM]) -> Self {
        BoundingBox::new(c[0], c[1], c[2], c[3])
    }
}

impl TryFrom<&[f32]> for BoundingBox {
    type Error = anyhow::Error;

    fn try_from(c: &[f32]) -> Result<Self> {
        match c {
            [x1, y1, x2, y2] => Ok(BoundingBox::new(*x1, *y1, *x2, *y2)),
            _ => Err(DimensionMismatch {
                expected: BOX_DIM,
                got: c.len(),
            }
            .into()),
        }
    }
}

impl EstimateClose for BoundingBox {
    /// Allows comparing bboxes
    ///
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self._x1 - other._x1).abs() < eps
            && (self._y1 - other._y1).abs() < eps
            && (self._x2 - other._x2).abs() < eps
            && (self._y2 - other._y2).abs() < eps
    }
}

impl PartialEq<Self> for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.almost_same(other, EPS)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::bbox::BoundingBox;
    use crate::{Errors, EPS};

    #[test]
    fn test_iou() {
        let bb1 = BoundingBox::new(-1.0, -1.0, 1.0, 1.0);
        let bb2 = BoundingBox::new(-0.9, -0.9, 1.1, 1.1);
        let bb3 = BoundingBox::new(1.0, 1.0, 4.0, 4.0);

        assert!(BoundingBox::iou(&bb1, &bb1).unwrap() > 0.999);
        assert!(BoundingBox::iou(&bb2, &bb2).unwrap() > 0.999);
        assert!(BoundingBox::iou(&bb1, &bb2).unwrap() > 0.8);
        assert!(BoundingBox::iou(&bb1, &bb3).unwrap() < 0.001);
        assert!(BoundingBox::iou(&bb2, &bb3).unwrap() > 0.0);
    }

    #[test]
    fn half_overlap() {
        let bb1 = BoundingBox::new(0.0, 0.0, 2.0, 1.0);
        let bb2 = BoundingBox::new(1.0, 0.0, 3.0, 1.0);
        assert!((BoundingBox::intersection(&bb1, &bb2) - 1.0).abs() < EPS);
        assert!((BoundingBox::iou(&bb1, &bb2).unwrap() - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn degenerate_union() {
        let point = BoundingBox::new(1.0, 1.0, 1.0, 1.0);
        let err = BoundingBox::iou(&point, &point).unwrap_err();
        assert_eq!(err.downcast_ref::<Errors>(), Some(&Errors::DegenerateUnion));

        let bb = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(BoundingBox::iou(&point, &bb).unwrap(), 0.0);
    }

    #[test]
    fn from_slice() {
        let coords = [0.5f32, 1.0, 2.0, 3.0];
        let bb = BoundingBox::try_from(&coords[..]).unwrap();
        assert_eq!(bb, BoundingBox::new(0.5, 1.0, 2.0, 3.0));
        assert!((bb.area() - 3.0).abs() < EPS);

        let err = BoundingBox::try_from(&coords[..3]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Errors>(),
            Some(&Errors::DimensionMismatch {
                expected: 4,
                got: 3
            })
        );
        assert!(BoundingBox::try_from(&[0.0f32; 5][..]).is_err());
    }

    #[test]
    fn rounding() {
        let bb = BoundingBox::new(0.12345, 1.98765, 10.0004, -3.14159);
        assert_eq!(bb.rounded(3), [0.123, 1.988, 10.0, -3.142]);
        assert_eq!(bb.rounded(0), [0.0, 2.0, 10.0, -3.0]);
    }

    #[test]
    fn ltwh() {
        let bb = BoundingBox::ltwh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bb.as_array(), [1.0, 2.0, 4.0, 6.0]);
        assert!((bb.width() - 3.0).abs() < EPS);
        assert!((bb.height() - 4.0).abs() < EPS);
    }
}
