/// Errors that can occur while building or parsing frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The backing storage cannot hold even a frame header.
    #[error("buffer too small for frame header ({capacity} bytes, need {needed})")]
    BufferTooSmall { capacity: usize, needed: usize },

    /// The backing storage is full; no more payload bytes fit.
    #[error("frame buffer full ({capacity} bytes)")]
    BufferFull { capacity: usize },

    /// A received byte count that cannot be a valid frame.
    #[error("invalid frame size {size} (expected {min}..={max})")]
    InvalidFrameSize { size: usize, min: usize, max: usize },

    /// All received bytes have been consumed.
    #[error("payload exhausted")]
    PayloadExhausted,

    /// The payload cannot be described by the one-byte length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
