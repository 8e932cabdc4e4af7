pub use crate::distance::{center_distance, iou_distance};
pub use crate::matching::{match_by_cost, MatchResult};
pub use crate::metrics::moda::{
    compute_moda, compute_sequence_moda, Moda, DEFAULT_MODA_IOU_THRESHOLD,
};
pub use crate::trackers::options::TrackerOptions;
pub use crate::trackers::tracker::{Tracker, TrackerRecord, DEFAULT_DISTANCE_THRESHOLD};
pub use crate::trackers::tracklet::{Tracklet, TrackletRecord};
pub use crate::utils::bbox::BoundingBox;
pub use crate::Errors;
