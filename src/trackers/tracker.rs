use crate::check_threshold;
use crate::distance::center_distance;
use crate::matching::match_by_cost;
use crate::trackers::options::TrackerOptions;
use crate::trackers::tracklet::{Tracklet, TrackletRecord};
use crate::utils::bbox::BoundingBox;
use anyhow::Result;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default cost beyond which box pairs of consecutive frames are not linked
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 0.05;

/// Default number of decimals kept in records
pub const DEFAULT_RECORD_PRECISION: u32 = 3;

/// Default frame rate written to records
pub const DEFAULT_FPS: usize = 25;

/// Serializable representation of all the tracklets collected by the tracker
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerRecord {
    pub fps: usize,
    pub tracklets: Vec<TrackletRecord>,
}

/// Frame-to-frame tracker
///
/// Every frame the last boxes of the active tracklets are matched with the boxes of the frame
/// by [`center_distance`] and the optimal assignment. A matched tracklet is extended with its box,
/// an unmatched tracklet is finished, an unmatched box starts a new tracklet.
///
/// The tracker must be fed with frames in their order; a frame without boxes finishes all
/// the active tracklets.
///
#[derive(Debug, Clone)]
pub struct Tracker {
    active: Vec<Tracklet>,
    finished: Vec<Tracklet>,
    /// `previous_boxes[i]` is the last box of `active[i]`
    previous_boxes: Vec<BoundingBox>,
    frame_index: usize,
    distance_threshold: f32,
    fps: usize,
    precision: u32,
    tracklet_id: u64,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::from_options(&TrackerOptions::default())
    }
}

impl Tracker {
    /// Creates new tracker
    ///
    /// # Parameters
    /// * `distance_threshold` - a cost beyond which potential pairs are eliminated, must not be negative
    ///
    pub fn new(distance_threshold: f32) -> Result<Self> {
        TrackerOptions::default()
            .distance_threshold(distance_threshold)
            .build()
    }

    pub(crate) fn from_options(opts: &TrackerOptions) -> Self {
        Self {
            active: Vec::default(),
            finished: Vec::default(),
            previous_boxes: Vec::default(),
            frame_index: 0,
            distance_threshold: opts.get_distance_threshold(),
            fps: opts.get_fps(),
            precision: opts.get_precision(),
            tracklet_id: 0,
        }
    }

    fn gen_tracklet_id(&mut self) -> u64 {
        self.tracklet_id += 1;
        self.tracklet_id
    }

    /// Updates tracklets with the boxes of the next frame
    ///
    /// Fails with [`EmptyTracklet`](crate::Errors::EmptyTracklet) if an active tracklet has
    /// no box to continue from.
    ///
    /// # Parameters
    /// * `boxes` - bounding boxes of the frame, may be empty
    ///
    pub fn track(&mut self, boxes: &[BoundingBox]) -> Result<()> {
        let res = match_by_cost(
            &self.previous_boxes,
            boxes,
            center_distance,
            self.distance_threshold,
        );

        for &(prev_idx, box_idx) in &res.matched {
            self.active[prev_idx].add_box(boxes[box_idx]);
        }

        if !res.unmatched_left.is_empty() {
            let mut lost = vec![false; self.active.len()];
            for &idx in &res.unmatched_left {
                lost[idx] = true;
            }
            let (finished, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
                .into_iter()
                .zip(lost)
                .partition(|(_, lost)| *lost);
            self.active = active.into_iter().map(|(t, _)| t).collect();
            self.finished.extend(finished.into_iter().map(|(t, _)| t));
        }

        for &box_idx in &res.unmatched_right {
            let id = self.gen_tracklet_id();
            self.active
                .push(Tracklet::with_id(id, self.frame_index, boxes[box_idx]));
        }

        self.previous_boxes = self
            .active
            .iter()
            .map(Tracklet::previous_box)
            .collect::<Result<_>>()?;

        debug!(
            "Frame {}: {} boxes, {} continued, {} finished, {} started, {} active",
            self.frame_index,
            boxes.len(),
            res.matched.len(),
            res.unmatched_left.len(),
            res.unmatched_right.len(),
            self.active.len()
        );

        self.frame_index += 1;
        Ok(())
    }

    /// All tracklets, finished and active, ordered by the start frame and then by creation order
    ///
    pub fn tracklets(&self) -> Vec<&Tracklet> {
        self.finished
            .iter()
            .chain(self.active.iter())
            .sorted_by_key(|t| (t.start_index(), t.id()))
            .collect()
    }

    /// Tracklets that can still be continued by the next frame
    ///
    pub fn active(&self) -> &[Tracklet] {
        &self.active
    }

    /// Tracklets that were lost and will never be continued
    ///
    pub fn finished(&self) -> &[Tracklet] {
        &self.finished
    }

    /// The last box of every active tracklet, positionally aligned with [`Tracker::active`]
    ///
    pub fn previous_boxes(&self) -> &[BoundingBox] {
        &self.previous_boxes
    }

    /// The index of the next frame to track, equal to the number of processed frames
    ///
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn distance_threshold(&self) -> f32 {
        self.distance_threshold
    }

    /// Serializable record of all the tracklets
    ///
    /// # Parameters
    /// * `fps` - the frame rate of the sequence
    /// * `precision` - the number of decimals kept for box coordinates
    ///
    pub fn to_record(&self, fps: usize, precision: u32) -> TrackerRecord {
        TrackerRecord {
            fps,
            tracklets: self
                .tracklets()
                .into_iter()
                .map(|t| t.to_record(precision))
                .collect(),
        }
    }

    /// Serializable record built with the frame rate and precision the tracker is configured with
    ///
    pub fn record(&self) -> TrackerRecord {
        self.to_record(self.fps, self.precision)
    }

    /// Changes the threshold for the following frames
    ///
    pub fn set_distance_threshold(&mut self, distance_threshold: f32) -> Result<()> {
        self.distance_threshold = check_threshold(distance_threshold)?;
        Ok(())
    }
}
