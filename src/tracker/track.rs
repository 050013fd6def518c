//! Persistent track identity for multi-object tracking.

use crate::tracker::detection::Detection;

/// A tracked object: a stable identity linking detections across frames.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track identifier, never reused
    pub id: u64,
    /// Last known center point (x, y)
    pub centroid: (f32, f32),
    /// The detection that most recently matched this track
    pub last_detection: Detection,
    /// Consecutive frames this track has gone unmatched
    pub disappeared: u32,
}

impl Track {
    /// Create a new track from an unmatched detection.
    pub fn new(id: u64, detection: Detection) -> Self {
        Self {
            id,
            centroid: detection.centroid,
            last_detection: detection,
            disappeared: 0,
        }
    }

    /// Absorb a matched detection: move the centroid, remember the
    /// detection, and reset the disappearance count.
    pub fn absorb(&mut self, detection: Detection) {
        self.centroid = detection.centroid;
        self.last_detection = detection;
        self.disappeared = 0;
    }
}
