use thiserror::Error;

/// Error type for the framed state-publishing protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The peer closed the connection before a full frame arrived.
    #[error("peer closed the connection")]
    ConnectionClosed,
    /// The payload could not be decoded as a wire array. The connection
    /// itself is still usable; the frame is simply discarded.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    /// The serialized payload does not fit a u32 length prefix.
    #[error("frame of {0} bytes exceeds the u32 length prefix")]
    FrameTooLarge(usize),
    /// Underlying socket failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Whether the stream can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ProtocolError::MalformedPayload(_))
    }
}
