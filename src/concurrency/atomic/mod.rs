//! Cache-line padded atomic scalars.
//!
//! Each type wraps the matching `core::sync::atomic` type and dereferences to
//! it, so every native operation (`load`, `store`, `swap`, `compare_exchange`,
//! `fetch_add`, ...) is available unchanged. The wrappers only change layout:
//! the scalar is surrounded by filler bytes and the struct is aligned to
//! [`CACHE_LINE_SIZE`](super::cache_padded::CACHE_LINE_SIZE), so heavily
//! contended counters and flags placed side by side never share a line.
//!
//! ```
//! use core::sync::atomic::Ordering;
//! use padlock::concurrency::atomic::PaddedU64;
//!
//! struct Stats {
//!     hits: PaddedU64,
//!     misses: PaddedU64,
//! }
//!
//! let stats = Stats { hits: PaddedU64::new(0), misses: PaddedU64::default() };
//! stats.hits.fetch_add(1, Ordering::Relaxed);
//! assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
//! assert_eq!(stats.misses.load(Ordering::Relaxed), 0);
//! ```

/// Padded `AtomicBool`.
pub mod bool;
/// Padded `AtomicI32`.
pub mod i32;
/// Padded `AtomicI64`.
pub mod i64;
/// Padded `AtomicU32`.
pub mod u32;
/// Padded `AtomicU64`.
pub mod u64;

pub use self::bool::PaddedBool;
pub use self::i32::PaddedI32;
pub use self::i64::PaddedI64;
pub use self::u32::PaddedU32;
pub use self::u64::PaddedU64;
