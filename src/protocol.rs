//! Framed state-publishing protocol.
//!
//! Asymmetric roles over one persistent TCP connection: the publisher binds
//! and listens, the receiver connects. Each frame is a 4-byte big-endian
//! length prefix followed by a UTF-8 JSON payload.

mod error;
mod publisher;
mod receiver;
mod wire;

pub use error::ProtocolError;
pub use publisher::{StatePublisher, selected_report};
pub use receiver::StateReceiver;
pub use wire::{TargetReport, decode_payload, encode_frame};
