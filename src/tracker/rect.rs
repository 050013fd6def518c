/// Axis-aligned bounding box in TLBR format (left, top, right, bottom).
///
/// Detections arrive from the detector in image coordinates, so the box is
/// stored exactly as produced and converted on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge x coordinate
    pub left: f32,
    /// Top edge y coordinate
    pub top: f32,
    /// Right edge x coordinate
    pub right: f32,
    /// Bottom edge y coordinate
    pub bottom: f32,
}

impl Rect {
    /// Create a new Rect from edge coordinates (TLBR format).
    #[inline]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a Rect from a top-left corner and dimensions (TLWH format).
    #[inline]
    pub fn from_tlwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Width of the bounding box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the bounding box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Geometric center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Convert to a TLBR array: [left, top, right, bottom].
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}
