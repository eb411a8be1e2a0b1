use tracing::debug;

use crate::codec::{HEADER_SIZE, MAX_PAYLOAD_LEN};
use crate::error::{FrameError, Result};

/// Builds and parses one framed message in place over a borrowed byte slice.
///
/// The same instance handles both directions, one message at a time. On the
/// write side, [`begin`](Self::begin) reserves the header, payload bytes are
/// appended, and [`finalize`](Self::finalize) commits the length field; the
/// region `[0, wire_size)` is then ready to hand to a transport. On the read
/// side, a transport receives into the same slice and reports the byte count
/// to [`begin_read`](Self::begin_read), after which the payload is consumed
/// sequentially.
///
/// `head` marks the end of valid bytes (write cursor while building, received
/// size while parsing); `tail` is the payload read cursor. The read bound is
/// always `head`, the bytes actually present, never the header's declared
/// length, so a frame whose length field overstates the received size cannot
/// be read past its end.
pub struct MessageFrame<'a> {
    buf: &'a mut [u8],
    head: usize,
    tail: usize,
}

impl<'a> MessageFrame<'a> {
    /// Create a frame over an existing byte slice.
    ///
    /// The slice length is the capacity and bounds the total wire size
    /// (header plus payload) of any message built or received here.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            head: 0,
            tail: 0,
        }
    }

    /// Total capacity of the underlying slice.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Begin writing a new message, discarding any in-flight state.
    ///
    /// Writes the type tag, reserves the length byte, and positions the
    /// write cursor past the header.
    pub fn begin(&mut self, frame_type: u8) -> Result<()> {
        if self.buf.len() < HEADER_SIZE {
            return Err(FrameError::BufferTooSmall {
                capacity: self.buf.len(),
                needed: HEADER_SIZE,
            });
        }
        self.head = HEADER_SIZE;
        self.tail = 0;
        self.buf[0] = frame_type;
        self.buf[1] = 0; // Length placeholder, committed by finalize.
        Ok(())
    }

    /// Append one payload byte.
    ///
    /// Only meaningful between [`begin`](Self::begin) and
    /// [`finalize`](Self::finalize); calling it outside that window is not
    /// checked and corrupts whatever the cursor points at.
    pub fn write_byte(&mut self, v: u8) -> Result<()> {
        if self.head >= self.buf.len() {
            return Err(FrameError::BufferFull {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.head] = v;
        self.head += 1;
        Ok(())
    }

    /// Append a run of payload bytes, all-or-nothing.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.buf.len() - self.head {
            return Err(FrameError::BufferFull {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.head..self.head + bytes.len()].copy_from_slice(bytes);
        self.head += bytes.len();
        Ok(())
    }

    /// Commit the payload length into the header and return it.
    ///
    /// A payload longer than 255 bytes is clamped in the length field only:
    /// the extra bytes stay in the slice and still count toward
    /// [`wire_size`](Self::wire_size), but receivers are told 255. This
    /// silent truncation is part of the wire contract and must not be turned
    /// into an error.
    pub fn finalize(&mut self) -> u8 {
        let written = self.head.saturating_sub(HEADER_SIZE);
        let committed = if written > MAX_PAYLOAD_LEN {
            debug!(written, clamped = MAX_PAYLOAD_LEN, "payload length clamped");
            MAX_PAYLOAD_LEN
        } else {
            written
        };
        if let Some(length_byte) = self.buf.get_mut(1) {
            *length_byte = committed as u8;
        }
        committed as u8
    }

    /// The full message region `[0, wire_size)`, header plus payload,
    /// ready to transmit.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.head]
    }

    /// Total message size in bytes (header plus payload).
    pub fn wire_size(&self) -> usize {
        self.head
    }

    /// Begin parsing a received message of `size` bytes, discarding any
    /// in-flight state.
    ///
    /// `size` is the exact byte count the transport received into the slice,
    /// including the header. It becomes the hard bound for
    /// [`read_byte`](Self::read_byte).
    pub fn begin_read(&mut self, size: usize) -> Result<()> {
        if size < HEADER_SIZE || size > self.buf.len() {
            debug!(size, capacity = self.buf.len(), "rejected received frame size");
            return Err(FrameError::InvalidFrameSize {
                size,
                min: HEADER_SIZE,
                max: self.buf.len(),
            });
        }
        self.head = size;
        self.tail = HEADER_SIZE;
        Ok(())
    }

    /// The type tag from header byte 0.
    ///
    /// Meaningful once a message has been begun or received.
    pub fn frame_type(&self) -> u8 {
        self.buf.first().copied().unwrap_or(0)
    }

    /// The declared payload length from header byte 1.
    pub fn payload_len(&self) -> u8 {
        self.buf.get(1).copied().unwrap_or(0)
    }

    /// Read the next payload byte.
    ///
    /// Bounded by the received byte count, not the declared length; a header
    /// that promises more than was received cannot drag the cursor past the
    /// actual data.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.tail >= self.head {
            return Err(FrameError::PayloadExhausted);
        }
        let v = self.buf[self.tail];
        self.tail += 1;
        Ok(v)
    }

    /// Payload bytes still expected per the header's declared length.
    pub fn read_remaining(&self) -> usize {
        let payload_end = HEADER_SIZE + usize::from(self.payload_len());
        payload_end.saturating_sub(self.tail)
    }
}
