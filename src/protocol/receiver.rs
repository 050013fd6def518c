//! Client side of the state stream: reads length-prefixed frames.

use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};

use crate::protocol::error::ProtocolError;
use crate::protocol::wire::{self, TargetReport};

/// Reads wire frames from a connected publisher.
pub struct StateReceiver {
    stream: TcpStream,
}

impl StateReceiver {
    /// Connect to a publisher.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> std::io::Result<Self> {
        Ok(Self {
            stream: TcpStream::connect(addr)?,
        })
    }

    /// Wrap an already-established stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Read and decode one frame.
    ///
    /// Reads exactly 4 header bytes, then exactly the announced payload
    /// length, accumulating across partial reads. A peer close at either
    /// point is `ConnectionClosed` and ends the stream. A payload that
    /// fails to decode is `MalformedPayload`; the connection stays usable
    /// and the caller may continue with the next frame.
    pub fn receive(&mut self) -> Result<Vec<TargetReport>, ProtocolError> {
        let mut header = [0u8; 4];
        read_exact_or_closed(&mut self.stream, &mut header)?;
        let len = u32::from_be_bytes(header) as usize;

        let mut payload = vec![0u8; len];
        read_exact_or_closed(&mut self.stream, &mut payload)?;

        wire::decode_payload(&payload)
    }
}

fn read_exact_or_closed(stream: &mut TcpStream, buf: &mut [u8]) -> Result<(), ProtocolError> {
    stream.read_exact(buf).map_err(|err| {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            ProtocolError::ConnectionClosed
        } else {
            ProtocolError::Io(err)
        }
    })
}
