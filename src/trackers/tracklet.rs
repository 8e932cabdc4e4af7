use crate::utils::bbox::{BoundingBox, BOX_DIM};
use crate::Errors::EmptyTracklet;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Serializable representation of a tracklet
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackletRecord {
    /// The frame index that starts the tracklet
    pub start: usize,
    /// The boxes as `[x1, y1, x2, y2]` rounded to the requested precision
    pub boxes: Vec<[f32; BOX_DIM]>,
}

/// The chronological history of boxes that belong to a single object
///
/// A tracklet always holds at least one box: it is created with the box observed on the frame
/// the track starts at, and every following frame where the object is matched adds one more.
///
#[derive(Debug, Clone)]
pub struct Tracklet {
    id: u64,
    start_index: usize,
    boxes: Vec<BoundingBox>,
}

impl Tracklet {
    /// Creates the tracklet
    ///
    /// # Parameters
    /// * `start_index` - the frame index that starts the tracklet
    /// * `bbox` - the box observed on that frame
    ///
    pub fn new(start_index: usize, bbox: BoundingBox) -> Self {
        Self::with_id(0, start_index, bbox)
    }

    pub(crate) fn with_id(id: u64, start_index: usize, bbox: BoundingBox) -> Self {
        Self {
            id,
            start_index,
            boxes: vec![bbox],
        }
    }

    #[cfg(test)]
    pub(crate) fn broken(id: u64, start_index: usize) -> Self {
        Self {
            id,
            start_index,
            boxes: vec![],
        }
    }

    /// Creates the tracklet from raw coordinates, which must be exactly `(x1, y1, x2, y2)`
    ///
    pub fn from_slice(start_index: usize, coords: &[f32]) -> Result<Self> {
        Ok(Self::new(start_index, BoundingBox::try_from(coords)?))
    }

    /// Appends the box to the end of the history
    ///
    pub fn add_box(&mut self, bbox: BoundingBox) {
        self.boxes.push(bbox);
    }

    /// The last box of the tracklet
    ///
    pub fn previous_box(&self) -> Result<BoundingBox> {
        self.boxes.last().copied().ok_or_else(|| EmptyTracklet.into())
    }

    /// Identifier assigned by the tracker; unique within a tracker, grows with creation order
    ///
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Serializable copy of the tracklet with the coordinates rounded to `precision` decimals
    ///
    pub fn to_record(&self, precision: u32) -> TrackletRecord {
        TrackletRecord {
            start: self.start_index,
            boxes: self.boxes.iter().map(|b| b.rounded(precision)).collect(),
        }
    }
}
