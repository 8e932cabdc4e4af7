/// Multiple Object Detection Accuracy
pub mod moda;
