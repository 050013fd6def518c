//! Online multi-object tracking with operator target selection and a framed
//! TCP state stream.
//!
//! The crate has three layers:
//!
//! - [`tracker`]: greedy nearest-centroid association assigning stable,
//!   never-reused ids to per-frame detections.
//! - [`selector`]: the operator-facing selection state machine cycling
//!   through active track ids.
//! - [`protocol`]: the length-prefixed wire protocol publishing the selected
//!   target's state to a remote consumer, with publisher-side reconnect.
//!
//! The [`integration`] module ties them together into a strictly sequential
//! per-frame pipeline fed by any [`DetectionSource`] implementation.

pub mod integration;
pub mod protocol;
pub mod selector;
pub mod tracker;

pub use integration::{
    CommandSlot, DetectionBuilder, DetectionSource, FrameSummary, PipelineError, TrackingPipeline,
};
pub use protocol::{ProtocolError, StatePublisher, StateReceiver, TargetReport};
pub use selector::{Command, TargetSelector};
pub use tracker::{CentroidTracker, Detection, Rect, Track, TrackerConfig};
