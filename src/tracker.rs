mod centroid_tracker;
mod detection;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use detection::{Detection, filter_class};
pub use matching::{AssignmentResult, distance_matrix, greedy_assignment};
pub use rect::Rect;
pub use track::Track;
