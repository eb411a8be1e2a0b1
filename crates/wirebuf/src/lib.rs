//! Allocation-free buffer and framing primitives for packetized links.
//!
//! wirebuf targets firmware that talks over size-limited transports such as
//! LoRa, BLE, or UART: the caller owns the storage, every operation is O(1)
//! and non-blocking, and nothing here allocates, locks, or waits.
//!
//! # Crate Structure
//!
//! - [`cursor`] — Sequential byte reader/writer with per-call endianness
//! - [`frame`] — Single-message type/length framing and the host-side codec
//! - [`ring`] — Fixed-capacity circular FIFO queue

/// Re-export cursor types.
pub mod cursor {
    pub use wirebuf_cursor::*;
}

/// Re-export frame types.
pub mod frame {
    pub use wirebuf_frame::*;
}

/// Re-export ring queue types.
pub mod ring {
    pub use wirebuf_ring::*;
}
