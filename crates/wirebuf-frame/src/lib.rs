//! Minimal type/length framing for packetized links.
//!
//! Every message is framed with:
//! - A 1-byte type tag (caller-defined meaning)
//! - A 1-byte payload length (0-255, clamped)
//! - Up to 255 payload bytes
//!
//! The transport is expected to delimit message boundaries itself (fixed-size
//! radio packets, BLE characteristics, and so on) and hand the exact received
//! byte count to [`MessageFrame::begin_read`]. There is no magic number, no
//! checksum, and no escaping.
//!
//! [`MessageFrame`] builds and parses one message in place over
//! caller-supplied storage without allocating; [`encode_frame`] and
//! [`decode_frame`] are the growable-buffer twins for host-side tooling.

pub mod codec;
pub mod error;
pub mod message;

pub use codec::{decode_frame, encode_frame, FrameView, HEADER_SIZE, MAX_PAYLOAD_LEN};
pub use error::{FrameError, Result};
pub use message::MessageFrame;
