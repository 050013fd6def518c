//! Builder for creating Detection objects from various input formats.

use crate::tracker::{Detection, Rect};

/// Builder for creating `Detection` objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    class_id: u32,
    confidence: f32,
    bbox: Rect,
    centroid: Option<(f32, f32)>,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class ID.
    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the confidence score.
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set bounding box in TLBR format (left, top, right, bottom).
    pub fn tlbr(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.bbox = Rect::new(left, top, right, bottom);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0);
        self
    }

    /// Override the centroid, for backends that report the center
    /// separately from the box.
    pub fn centroid(mut self, x: f32, y: f32) -> Self {
        self.centroid = Some((x, y));
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        match self.centroid {
            Some(c) => Detection::with_centroid(self.class_id, self.confidence, self.bbox, c),
            None => Detection::new(self.class_id, self.confidence, self.bbox),
        }
    }
}
