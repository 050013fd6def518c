//! Per-frame pipeline combining detection, tracking, selection and
//! publishing.

use thiserror::Error;

use crate::integration::command::CommandSlot;
use crate::integration::detector::DetectionSource;
use crate::protocol::{ProtocolError, StatePublisher, selected_report};
use crate::selector::{Command, TargetSelector};
use crate::tracker::{CentroidTracker, TrackerConfig, filter_class};

/// Error from a single pipeline frame.
#[derive(Debug, Error)]
pub enum PipelineError<E: std::error::Error + 'static> {
    /// The detection backend failed to produce a frame.
    #[error("detection failed: {0}")]
    Detector(#[source] E),
    /// The state stream failed beyond its reconnect recovery.
    #[error("publish failed: {0}")]
    Publish(#[from] ProtocolError),
}

/// Outcome of one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    /// Number of active tracks after association
    pub track_count: usize,
    /// Currently selected track id
    pub selected: Option<u64>,
    /// Current toggle state
    pub toggle_state: bool,
    /// Whether a quit command was received; the caller should shut down
    pub quit: bool,
}

/// End-to-end per-frame pipeline.
///
/// Owns the detector, tracker, selector and publisher exclusively; the only
/// state shared with other threads is the [`CommandSlot`]. Frames are
/// strictly sequential: one frame is fully processed (capture, detect,
/// track, select, publish) before the next begins.
pub struct TrackingPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    selector: TargetSelector,
    commands: CommandSlot,
    publisher: StatePublisher,
    class_of_interest: Option<u32>,
}

impl<D: DetectionSource> TrackingPipeline<D> {
    /// Create a pipeline around a detector and a bound publisher.
    pub fn new(detector: D, config: TrackerConfig, publisher: StatePublisher) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
            selector: TargetSelector::new(),
            commands: CommandSlot::new(),
            publisher,
            class_of_interest: None,
        }
    }

    /// Only track detections of the given class; everything else is
    /// discarded before association.
    pub fn with_class_filter(mut self, class_id: u32) -> Self {
        self.class_of_interest = Some(class_id);
        self
    }

    /// Handle for the input-capture thread to post commands into.
    pub fn commands(&self) -> CommandSlot {
        self.commands.clone()
    }

    /// Process a single frame.
    ///
    /// The pending command is drained exactly once at the frame boundary. A
    /// quit command short-circuits before capture; any other command is
    /// applied to the selector after the track set has been updated, so
    /// cycling always sees the ids of the current frame.
    pub fn process_frame(&mut self) -> Result<FrameSummary, PipelineError<D::Error>>
    where
        D::Error: std::error::Error + 'static,
    {
        let command = self.commands.take();
        if command == Some(Command::Quit) {
            return Ok(FrameSummary {
                track_count: self.tracker.tracks().len(),
                selected: self.selector.selected(),
                toggle_state: self.selector.toggle_state(),
                quit: true,
            });
        }

        let mut detections = self.detector.next_frame().map_err(PipelineError::Detector)?;
        if let Some(class_id) = self.class_of_interest {
            detections = filter_class(detections, class_id);
        }

        self.tracker.update(&detections);

        if let Some(command) = command {
            self.selector.apply(command, &self.tracker.active_ids());
        }

        let reports = selected_report(self.tracker.tracks(), &self.selector);
        self.publisher.publish(&reports)?;

        Ok(FrameSummary {
            track_count: self.tracker.tracks().len(),
            selected: self.selector.selected(),
            toggle_state: self.selector.toggle_state(),
            quit: false,
        })
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a reference to the selector state.
    pub fn selector(&self) -> &TargetSelector {
        &self.selector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::StateReceiver;
    use crate::tracker::{Detection, Rect};
    use std::thread;

    struct MockDetector {
        detections: Vec<Detection>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn next_frame(&mut self) -> Result<Vec<Detection>, Self::Error> {
            Ok(self.detections.clone())
        }
    }

    #[test]
    fn test_pipeline_frame() {
        let detector = MockDetector {
            detections: vec![
                Detection::new(1, 0.9, Rect::new(10.0, 20.0, 50.0, 80.0)),
                Detection::new(2, 0.8, Rect::new(100.0, 100.0, 120.0, 120.0)),
            ],
        };

        let publisher = StatePublisher::bind("127.0.0.1:0").unwrap();
        let addr = publisher.local_addr().unwrap();
        let mut pipeline =
            TrackingPipeline::new(detector, TrackerConfig::default(), publisher).with_class_filter(1);
        let commands = pipeline.commands();

        let reader = thread::spawn(move || {
            let mut receiver = StateReceiver::connect(addr).unwrap();
            let first = receiver.receive().unwrap();
            let second = receiver.receive().unwrap();
            (first, second)
        });

        // Frame 1: no command, nothing selected yet.
        let summary = pipeline.process_frame().unwrap();
        assert_eq!(summary.track_count, 1); // class 2 filtered out
        assert_eq!(summary.selected, None);
        assert!(!summary.quit);

        // Frame 2: select the only track.
        commands.post(Command::Next);
        let summary = pipeline.process_frame().unwrap();
        assert_eq!(summary.selected, Some(0));

        let (first, second) = reader.join().unwrap();
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].track_id, 0);

        // Quit short-circuits before capture.
        commands.post(Command::Quit);
        let summary = pipeline.process_frame().unwrap();
        assert!(summary.quit);
    }
}
