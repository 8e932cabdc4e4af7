use crate::utils::bbox::BoundingBox;
use rand::distributions::Uniform;
use rand::prelude::ThreadRng;
use rand::Rng;

/// Generates the frame of `n` random well-formed boxes with corners in `[-1, 2)`
///
pub fn random_frame(n: usize) -> Vec<BoundingBox> {
    let mut gen = rand::thread_rng();
    let pos = Uniform::new(-1.0f32, 1.0);
    let size = Uniform::new(0.01f32, 1.0);
    (0..n)
        .map(|_| {
            BoundingBox::ltwh(
                gen.sample(pos),
                gen.sample(pos),
                gen.sample(size),
                gen.sample(size),
            )
        })
        .collect()
}

/// Boxes never get narrower or lower than the value
const MIN_SIDE: f32 = 1.0;

/// Infinite stream of boxes of a single object wandering across frames
///
/// Every step the whole box is shifted by a random offset within `shift`, then the bottom-right
/// corner alone moves by up to `resize` more, which changes the box dimensions.
///
pub struct BoxGen {
    bbox: BoundingBox,
    gen: ThreadRng,
    shift: Uniform<f32>,
    resize: Uniform<f32>,
}

impl BoxGen {
    /// Object that moves in any direction
    ///
    /// # Parameters
    /// * `start` - the box preceding the first generated one
    /// * `shift` - the maximal offset of the box per frame along each axis
    /// * `resize` - the maximal change of the width and the height per frame
    ///
    pub fn new(start: BoundingBox, shift: f32, resize: f32) -> Self {
        Self::with_shift(start, Uniform::new_inclusive(-shift, shift), resize)
    }

    /// Object that moves only to the right and down
    ///
    pub fn new_monotonous(start: BoundingBox, shift: f32, resize: f32) -> Self {
        Self::with_shift(start, Uniform::new_inclusive(0.0, shift), resize)
    }

    fn with_shift(start: BoundingBox, shift: Uniform<f32>, resize: f32) -> Self {
        Self {
            bbox: start,
            gen: rand::thread_rng(),
            shift,
            resize: Uniform::new_inclusive(-resize, resize),
        }
    }
}

impl Iterator for BoxGen {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        let dx = self.gen.sample(self.shift);
        let dy = self.gen.sample(self.shift);
        let x1 = self.bbox.x1() + dx;
        let y1 = self.bbox.y1() + dy;
        let x2 = (self.bbox.x2() + dx + self.gen.sample(self.resize)).max(x1 + MIN_SIDE);
        let y2 = (self.bbox.y2() + dy + self.gen.sample(self.resize)).max(y1 + MIN_SIDE);

        self.bbox = BoundingBox::new(x1, y1, x2, y2);
        Some(self.bbox)
    }
}

/// Simulates a detector: every box is jittered by up to `jitter`, missed with the probability
/// `miss_rate`, and the frame gets a spurious box with the probability `false_alarm_rate`
///
pub struct NoisyDetector {
    gen: ThreadRng,
    jitter: Uniform<f32>,
    miss_rate: f64,
    false_alarm_rate: f64,
}

impl NoisyDetector {
    pub fn new(jitter: f32, miss_rate: f64, false_alarm_rate: f64) -> Self {
        Self {
            gen: rand::thread_rng(),
            jitter: Uniform::new_inclusive(-jitter, jitter),
            miss_rate,
            false_alarm_rate,
        }
    }

    pub fn detect(&mut self, truth: &[BoundingBox]) -> Vec<BoundingBox> {
        let mut res = Vec::with_capacity(truth.len() + 1);
        for b in truth {
            if self.gen.gen_bool(self.miss_rate) {
                continue;
            }
            let (dx, dy) = (self.gen.sample(self.jitter), self.gen.sample(self.jitter));
            res.push(BoundingBox::new(
                b.x1() + dx,
                b.y1() + dy,
                b.x2() + dx,
                b.y2() + dy,
            ));
        }
        if self.gen.gen_bool(self.false_alarm_rate) {
            let x = self.gen.gen_range(0.0f32..1000.0);
            let y = self.gen.gen_range(0.0f32..1000.0);
            res.push(BoundingBox::ltwh(x, y, 20.0, 20.0));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::examples::{random_frame, BoxGen, NoisyDetector};
    use crate::utils::bbox::BoundingBox;

    #[test]
    fn random_boxes_are_well_formed() {
        let frame = random_frame(100);
        assert_eq!(frame.len(), 100);
        assert!(frame.iter().all(|b| b.width() > 0.0 && b.height() > 0.0));
    }

    #[test]
    fn monotonous_drift() {
        let mut gen = BoxGen::new_monotonous(BoundingBox::ltwh(10.0, 10.0, 1.0, 1.0), 1.0, 0.5);
        let mut prev = gen.next().unwrap();
        for b in gen.take(50) {
            assert!(b.x1() >= prev.x1());
            assert!(b.y1() >= prev.y1());
            assert!(b.width() > 0.99 && b.height() > 0.99);
            prev = b;
        }
    }

    #[test]
    fn steps_are_bounded() {
        let start = BoundingBox::new(0.0, 0.0, 20.0, 20.0);
        let mut prev = start;
        for b in BoxGen::new(start, 2.0, 0.5).take(50) {
            assert!((b.x1() - prev.x1()).abs() <= 2.0 + 1e-4);
            assert!((b.y1() - prev.y1()).abs() <= 2.0 + 1e-4);
            assert!((b.width() - prev.width()).abs() <= 0.5 + 1e-4);
            prev = b;
        }
    }

    #[test]
    fn perfect_detector() {
        let truth = random_frame(5);
        let mut detector = NoisyDetector::new(0.0, 0.0, 0.0);
        assert_eq!(detector.detect(&truth), truth);

        let mut blind = NoisyDetector::new(0.0, 1.0, 0.0);
        assert!(blind.detect(&truth).is_empty());
    }
}
