//! Main centroid tracking algorithm implementation.

use std::collections::BTreeMap;

use log::debug;

use crate::tracker::detection::Detection;
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::track::Track;

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Frames a track may go unmatched before it is deregistered
    pub max_disappeared: u32,
    /// Maximum centroid distance for a valid match; beyond it a detection
    /// registers as a new identity instead of continuing an old one
    pub match_radius: Option<f32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 50,
            match_radius: None,
        }
    }
}

/// Multi-object tracker using greedy nearest-centroid association.
///
/// Track IDs are monotonically increasing and never reused, even after a
/// track is deregistered. Tracks are kept in a `BTreeMap` so iteration is
/// always in ascending id order, which makes distance ties deterministic.
pub struct CentroidTracker {
    tracks: BTreeMap<u64, Track>,
    next_id: u64,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: BTreeMap::new(),
            next_id: 0,
            config,
        }
    }

    /// Consume one frame's detections and return the updated track set.
    pub fn update(&mut self, detections: &[Detection]) -> &BTreeMap<u64, Track> {
        // No detections at all: everything ages.
        if detections.is_empty() {
            let ids: Vec<u64> = self.tracks.keys().copied().collect();
            for id in ids {
                self.age(id);
            }
            return &self.tracks;
        }

        // Nothing tracked yet: every detection starts a fresh identity.
        if self.tracks.is_empty() {
            for det in detections {
                self.register(det.clone());
            }
            return &self.tracks;
        }

        let row_ids: Vec<u64> = self.tracks.keys().copied().collect();
        let track_centroids: Vec<(f32, f32)> =
            row_ids.iter().map(|id| self.tracks[id].centroid).collect();
        let det_centroids: Vec<(f32, f32)> = detections.iter().map(|d| d.centroid).collect();

        let dists = matching::distance_matrix(&track_centroids, &det_centroids);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(&dists, self.config.match_radius);

        for (row, col) in matches {
            let id = row_ids[row];
            if let Some(track) = self.tracks.get_mut(&id) {
                track.absorb(detections[col].clone());
            }
        }

        for row in unmatched_tracks {
            self.age(row_ids[row]);
        }

        for col in unmatched_detections {
            self.register(detections[col].clone());
        }

        &self.tracks
    }

    /// Active track ids, sorted ascending.
    pub fn active_ids(&self) -> Vec<u64> {
        self.tracks.keys().copied().collect()
    }

    /// Current track set, keyed by id.
    pub fn tracks(&self) -> &BTreeMap<u64, Track> {
        &self.tracks
    }

    fn register(&mut self, detection: Detection) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        debug!("registered track {id} at {:?}", detection.centroid);
        self.tracks.insert(id, Track::new(id, detection));
        id
    }

    fn age(&mut self, id: u64) {
        let expired = match self.tracks.get_mut(&id) {
            Some(track) => {
                track.disappeared += 1;
                track.disappeared > self.config.max_disappeared
            }
            None => false,
        };
        if expired {
            self.tracks.remove(&id);
            debug!("track {id} expired");
        }
    }
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
