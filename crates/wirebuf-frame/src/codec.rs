use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: type (1) + length (1) = 2 bytes.
pub const HEADER_SIZE: usize = 2;

/// Largest payload the one-byte length field can describe.
pub const MAX_PAYLOAD_LEN: usize = 255;

/// A decoded frame with its payload detached from the receive buffer.
///
/// This is the host-side view; on-device parsing reads in place through
/// [`MessageFrame`](crate::message::MessageFrame) instead.
#[derive(Debug, Clone)]
pub struct FrameView {
    /// The caller-defined type tag.
    pub frame_type: u8,
    /// The payload bytes.
    pub payload: Bytes,
}

impl FrameView {
    /// Create a new frame view.
    pub fn new(frame_type: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            frame_type,
            payload: payload.into(),
        }
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌───────────┬────────────┬──────────────────┐
/// │ Type (1B) │ Length (1B)│ Payload           │
/// │           │ 0-255      │ (Length bytes)    │
/// └───────────┴────────────┴──────────────────┘
/// ```
///
/// Unlike the in-place builder, which clamps an oversized payload's length
/// field, the host side sees the whole payload up front and refuses one the
/// length byte cannot describe.
pub fn encode_frame(frame_type: u8, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD_LEN,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u8(frame_type);
    dst.put_u8(payload.len() as u8);
    dst.put_slice(payload);
    Ok(())
}

/// Decode one frame from a buffer of accumulated bytes.
///
/// Returns `None` until the buffer holds a complete frame (header plus the
/// declared payload length). On success, consumes the frame bytes and leaves
/// any trailing bytes in `src` for the next call.
pub fn decode_frame(src: &mut BytesMut) -> Option<FrameView> {
    if src.len() < HEADER_SIZE {
        return None; // Need more data
    }

    let payload_len = src[1] as usize;
    if src.len() < HEADER_SIZE + payload_len {
        return None; // Need more data
    }

    let frame_type = src[0];
    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Some(FrameView {
        frame_type,
        payload,
    })
}
