//! Per-frame detection input for the tracker.

use crate::tracker::rect::Rect;

/// A single object detection produced by an inference backend.
///
/// Detections are immutable for the lifetime of the frame that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Class ID assigned by the detection model
    pub class_id: u32,
    /// Detection confidence score
    pub confidence: f32,
    /// Bounding box in TLBR format
    pub bbox: Rect,
    /// Center point (x, y) of the detection
    pub centroid: (f32, f32),
}

impl Detection {
    /// Create a detection with the centroid derived from the bounding box.
    pub fn new(class_id: u32, confidence: f32, bbox: Rect) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
            centroid: bbox.center(),
        }
    }

    /// Create a detection with an explicit centroid, for backends that
    /// report the center separately from the box.
    pub fn with_centroid(class_id: u32, confidence: f32, bbox: Rect, centroid: (f32, f32)) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
            centroid,
        }
    }
}

/// Keep only the detections of the class of interest.
///
/// The detector reports every class it knows about; the tracker only ever
/// sees one class, so everything else is dropped up front.
pub fn filter_class(detections: Vec<Detection>, class_id: u32) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|d| d.class_id == class_id)
        .collect()
}
