//! Concurrency primitives.
//!
//! - [`atomic`]: native atomic scalars padded out to a full cache line.
//! - [`sync`]: [`GuardedValue`](sync::GuardedValue), load/store/swap for values
//!   of any shape behind a reader/writer lock.
//! - [`cache_padded`]: the cache-line size and padding arithmetic the padded
//!   types are built from.

pub mod atomic;
pub mod cache_padded;
pub mod sync;

pub use cache_padded::CACHE_LINE_SIZE;
