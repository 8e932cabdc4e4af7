/// Tracklet - the box history of a single object
pub mod tracklet;

/// Frame-to-frame tracker implementation
pub mod tracker;

/// Tracker configuration
pub mod options;
