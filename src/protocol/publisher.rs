//! Server side of the state stream: publishes the selected target per frame.

use std::collections::BTreeMap;
use std::io::Write;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use log::{info, warn};

use crate::protocol::error::ProtocolError;
use crate::protocol::wire::{self, TargetReport};
use crate::selector::TargetSelector;
use crate::tracker::Track;

/// Publishes one wire frame per pipeline frame over a persistent TCP
/// connection.
///
/// The publisher owns the listening socket and at most one peer connection.
/// A write failure is treated as a peer disconnect: the dead connection is
/// dropped and `publish` blocks on `accept` for a replacement, so frames
/// produced while no peer is attached are dropped rather than queued. This
/// stalls the frame loop during reconnect, which is the intended trade-off
/// for a single-consumer link.
pub struct StatePublisher {
    listener: TcpListener,
    conn: Option<TcpStream>,
}

impl StatePublisher {
    /// Bind the listening socket. No peer is accepted yet.
    pub fn bind<A: ToSocketAddrs>(addr: A) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        info!("state publisher listening on {}", listener.local_addr()?);
        Ok(Self {
            listener,
            conn: None,
        })
    }

    /// The bound local address, useful when binding to port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Block until a peer connects.
    pub fn accept(&mut self) -> std::io::Result<SocketAddr> {
        let (stream, peer) = self.listener.accept()?;
        info!("peer connected: {peer}");
        self.conn = Some(stream);
        Ok(peer)
    }

    /// Transmit one frame, best-effort.
    ///
    /// Blocks on `accept` first if no peer is attached. On a write failure
    /// the frame is dropped and the publisher blocks for a new peer;
    /// publishing resumes with the next frame.
    pub fn publish(&mut self, reports: &[TargetReport]) -> Result<(), ProtocolError> {
        let frame = wire::encode_frame(reports)?;

        if self.conn.is_none() {
            self.accept()?;
        }

        // Attached above when absent.
        let Some(conn) = self.conn.as_mut() else {
            return Err(ProtocolError::ConnectionClosed);
        };

        if let Err(err) = conn.write_all(&frame) {
            warn!("peer disconnected ({err}), waiting for a new connection");
            self.conn = None;
            self.accept()?;
        }
        Ok(())
    }
}

/// Build the zero-or-one report list for the current frame: empty when
/// nothing is selected or the selected track no longer exists.
pub fn selected_report(
    tracks: &BTreeMap<u64, Track>,
    selector: &TargetSelector,
) -> Vec<TargetReport> {
    selector
        .selected()
        .and_then(|id| tracks.get(&id))
        .map(|track| vec![TargetReport::from_track(track, selector.toggle_state())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Command;
    use crate::tracker::{Detection, Rect};

    fn track_map(ids: &[u64]) -> BTreeMap<u64, Track> {
        ids.iter()
            .map(|&id| {
                let det = Detection::new(1, 0.9, Rect::new(0.0, 0.0, 10.0, 10.0));
                (id, Track::new(id, det))
            })
            .collect()
    }

    #[test]
    fn test_no_selection_is_empty() {
        let tracks = track_map(&[1, 2]);
        let selector = TargetSelector::new();
        assert!(selected_report(&tracks, &selector).is_empty());
    }

    #[test]
    fn test_stale_selection_is_empty() {
        let mut selector = TargetSelector::new();
        selector.apply(Command::Next, &[5]);
        // Track 5 has since expired.
        let tracks = track_map(&[6]);
        assert!(selected_report(&tracks, &selector).is_empty());
    }

    #[test]
    fn test_selected_track_is_reported() {
        let tracks = track_map(&[3, 4]);
        let mut selector = TargetSelector::new();
        selector.apply(Command::Next, &[3, 4]);
        selector.apply(Command::Toggle, &[3, 4]);

        let reports = selected_report(&tracks, &selector);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].track_id, 3);
        assert_eq!(reports[0].state, 1);
    }
}
