//! Fixed-capacity FIFO queueing without allocation.
//!
//! [`RingQueue`] stores up to `N` elements inline, sized at the type level,
//! and never blocks: a push onto a full queue hands the element straight
//! back, leaving the drop-or-evict decision with the caller.

pub mod queue;

pub use queue::RingQueue;
