//! Integration module for wiring detection backends, operator input and the
//! state stream into a per-frame tracking pipeline.

mod builder;
mod command;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use command::CommandSlot;
pub use detector::DetectionSource;
pub use pipeline::{FrameSummary, PipelineError, TrackingPipeline};
