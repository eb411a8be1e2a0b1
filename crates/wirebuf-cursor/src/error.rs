/// Errors that can occur in cursor read/write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// Not enough space left to write the requested value.
    #[error("write overflow (need {needed} bytes, {remaining} remaining)")]
    WriteOverflow { needed: usize, remaining: usize },

    /// Not enough unread data left to decode the requested value.
    #[error("read underflow (need {needed} bytes, {remaining} remaining)")]
    ReadUnderflow { needed: usize, remaining: usize },
}

pub type Result<T> = std::result::Result<T, CursorError>;
