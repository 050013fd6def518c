//! Trait for frame-producing detection backends.

use crate::tracker::Detection;

/// Trait for the capture-and-detect collaborator feeding the pipeline.
///
/// One call corresponds to one video frame: the implementation acquires the
/// frame from its source and runs inference on it. Image buffers never cross
/// this boundary; only the resulting detections do.
///
/// # Example
///
/// ```ignore
/// use stracker_rs::{DetectionSource, Detection};
///
/// struct MyDetector {
///     // Your camera + model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Vec<Detection>, Self::Error> {
///         // Capture a frame, run inference, return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for capture or inference failures.
    type Error;

    /// Acquire the next frame and return its detections.
    ///
    /// May block until a frame is available.
    fn next_frame(&mut self) -> Result<Vec<Detection>, Self::Error>;
}
