//! Sequential byte reading and writing over caller-supplied storage.
//!
//! [`ByteCursor`] is a non-owning view over a byte slice with independent
//! read and write cursors and bounds-checked scalar accessors in both byte
//! orders. It never allocates and never touches memory outside the slice it
//! was given, which makes it suitable for interrupt context and other
//! real-time paths.

pub mod cursor;
pub mod error;

pub use cursor::ByteCursor;
pub use error::{CursorError, Result};
