//! Wire format for the selected-target state stream.
//!
//! A frame is a 4-byte big-endian u32 length prefix followed by exactly that
//! many bytes of UTF-8 JSON: an array of target objects, empty when no
//! target is selected. There is no handshake, no message type tag and no
//! heartbeat; "no target" is an empty array, not a missing frame.

use serde::{Deserialize, Serialize};

use crate::protocol::error::ProtocolError;
use crate::tracker::Track;

/// Serialized state of the selected target, one element of the wire array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    #[serde(rename = "TrackID")]
    pub track_id: u64,
    /// Binary toggle state, 0 or 1
    #[serde(rename = "State")]
    pub state: u8,
    /// "off" or "on", derived from `state`
    #[serde(rename = "Light")]
    pub light: String,
    #[serde(rename = "Confidence")]
    pub confidence: f32,
    #[serde(rename = "Left")]
    pub left: f32,
    #[serde(rename = "Top")]
    pub top: f32,
    #[serde(rename = "Right")]
    pub right: f32,
    #[serde(rename = "Bottom")]
    pub bottom: f32,
    #[serde(rename = "CenterX")]
    pub center_x: f32,
    #[serde(rename = "CenterY")]
    pub center_y: f32,
}

impl TargetReport {
    /// Build a report for a track under the given toggle state.
    pub fn from_track(track: &Track, toggle_state: bool) -> Self {
        let bbox = track.last_detection.bbox;
        Self {
            track_id: track.id,
            state: toggle_state as u8,
            light: if toggle_state { "on" } else { "off" }.to_string(),
            confidence: track.last_detection.confidence,
            left: bbox.left,
            top: bbox.top,
            right: bbox.right,
            bottom: bbox.bottom,
            center_x: track.centroid.0,
            center_y: track.centroid.1,
        }
    }
}

/// Encode a report list as a length-prefixed wire frame.
pub fn encode_frame(reports: &[TargetReport]) -> Result<Vec<u8>, ProtocolError> {
    let payload = serde_json::to_vec(reports).map_err(ProtocolError::MalformedPayload)?;
    let len = u32::try_from(payload.len()).map_err(|_| ProtocolError::FrameTooLarge(payload.len()))?;

    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decode a frame payload (the bytes after the length prefix) back into a
/// report list.
pub fn decode_payload(payload: &[u8]) -> Result<Vec<TargetReport>, ProtocolError> {
    serde_json::from_slice(payload).map_err(ProtocolError::MalformedPayload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Detection, Rect};
    use approx::assert_relative_eq;

    #[test]
    fn test_report_from_track() {
        let det = Detection::new(1, 0.87, Rect::new(10.0, 20.0, 50.0, 80.0));
        let track = Track::new(4, det);

        let off = TargetReport::from_track(&track, false);
        assert_eq!(off.track_id, 4);
        assert_eq!(off.state, 0);
        assert_eq!(off.light, "off");
        assert_relative_eq!(off.center_x, 30.0);
        assert_relative_eq!(off.center_y, 50.0);

        let on = TargetReport::from_track(&track, true);
        assert_eq!(on.state, 1);
        assert_eq!(on.light, "on");
    }

    #[test]
    fn test_frame_layout() {
        let frame = encode_frame(&[]).unwrap();
        // Empty array serializes as "[]": 2 payload bytes.
        assert_eq!(&frame[..4], &[0, 0, 0, 2]);
        assert_eq!(&frame[4..], b"[]");
    }

    #[test]
    fn test_round_trip() {
        let det = Detection::new(1, 0.87, Rect::new(10.0, 20.0, 50.0, 80.0));
        let reports = vec![TargetReport::from_track(&Track::new(7, det), true)];

        let frame = encode_frame(&reports).unwrap();
        let decoded = decode_payload(&frame[4..]).unwrap();
        assert_eq!(decoded, reports);
    }

    #[test]
    fn test_wire_key_names() {
        let det = Detection::new(1, 0.5, Rect::new(0.0, 0.0, 2.0, 2.0));
        let json = serde_json::to_value([TargetReport::from_track(&Track::new(0, det), false)]).unwrap();
        let obj = &json[0];
        for key in [
            "TrackID", "State", "Light", "Confidence", "Left", "Top", "Right", "Bottom",
            "CenterX", "CenterY",
        ] {
            assert!(obj.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_payload(b"not json"),
            Err(ProtocolError::MalformedPayload(_))
        ));
    }
}
