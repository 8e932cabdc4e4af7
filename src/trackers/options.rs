use crate::check_threshold;
use crate::trackers::tracker::{
    Tracker, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_FPS, DEFAULT_RECORD_PRECISION,
};
use anyhow::Result;

/// Class that is used to configure the Tracker
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    distance_threshold: f32,
    fps: usize,
    precision: u32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            fps: DEFAULT_FPS,
            precision: DEFAULT_RECORD_PRECISION,
        }
    }
}

impl TrackerOptions {
    /// Builds the tracker, fails when the distance threshold is negative or NaN
    ///
    pub fn build(self) -> Result<Tracker> {
        check_threshold(self.distance_threshold)?;
        Ok(Tracker::from_options(&self))
    }

    /// The maximal cost of a box pair of two consecutive frames that is still linked into the same
    /// tracklet.
    ///
    /// The cost is the euclidean distance between the `(x1, y1, x2, y2)` vectors of the boxes, so the
    /// value depends on the coordinate units: for normalized coordinates the default `0.05` is
    /// reasonable, for pixel coordinates it must be scaled accordingly. `f32::INFINITY` links every
    /// assigned pair, `0` links only identical boxes.
    ///
    pub fn distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }

    /// The frame rate written to [`Tracker::record`]
    ///
    pub fn fps(mut self, fps: usize) -> Self {
        self.fps = fps;
        self
    }

    /// The number of decimals kept for box coordinates in [`Tracker::record`]
    ///
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub(crate) fn get_distance_threshold(&self) -> f32 {
        self.distance_threshold
    }

    pub(crate) fn get_fps(&self) -> usize {
        self.fps
    }

    pub(crate) fn get_precision(&self) -> u32 {
        self.precision
    }
}
