//! # `padlock` - False-sharing-free atomics and guarded values
//!
//! Two small building blocks for state shared between threads.
//!
//! ## Padded atomics
//!
//! [`PaddedBool`], [`PaddedI32`], [`PaddedU32`], [`PaddedI64`] and [`PaddedU64`]
//! wrap the native atomics and surround them with filler so each one occupies
//! a cache line of its own. They dereference to the native atomic, so the
//! whole `core::sync::atomic` API is available unchanged; only the layout
//! differs. Use them for counters and flags that many threads hammer at once
//! and that would otherwise sit next to each other in memory.
//!
//! ## Guarded values
//!
//! [`GuardedValue<T>`] gives any `T` the `load` / `store` / `swap` call shape of
//! an atomic by keeping it behind a reader/writer lock. Readers run
//! concurrently, writers run alone, and `swap` is a single indivisible
//! exchange. The held value can be encoded to and decoded from JSON without
//! exposing the lock, and a failed decode leaves the value untouched.
//!
//! ## Example
//!
//! ```rust
//! use core::sync::atomic::Ordering;
//! use padlock::{GuardedValue, PaddedU64};
//!
//! let requests = PaddedU64::new(0);
//! requests.fetch_add(1, Ordering::Relaxed);
//!
//! let label = GuardedValue::new(String::from("idle"));
//! let previous = label.swap(String::from("busy"));
//! assert_eq!(previous, "idle");
//! assert_eq!(label.encode().unwrap(), br#""busy""#);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emits `tracing` events when encoding or decoding fails.
//! - `proptest`: implements `proptest::arbitrary::Arbitrary` for
//!   [`GuardedValue<T>`].

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;

pub use concurrency::atomic::{PaddedBool, PaddedI32, PaddedI64, PaddedU32, PaddedU64};
pub use concurrency::cache_padded::CACHE_LINE_SIZE;
pub use concurrency::sync::{DecodingError, EncodingError, GuardedValue};

// Compile-time assertions for the padded layouts.
const _: () = {
    use core::mem;

    macro_rules! assert_owns_line {
        ($padded:ty, $atomic:ty) => {
            // Whole lines only, and at least one of them.
            assert!(mem::size_of::<$padded>() % CACHE_LINE_SIZE == 0);
            assert!(mem::size_of::<$padded>() >= CACHE_LINE_SIZE);
            assert!(mem::align_of::<$padded>() == CACHE_LINE_SIZE);
            // The scalar must end exactly on the first line boundary, so nothing
            // but head padding shares its line.
            assert!(
                concurrency::cache_padded::padding_for(mem::size_of::<$atomic>())
                    + mem::size_of::<$atomic>()
                    == CACHE_LINE_SIZE
            );
        };
    }

    assert_owns_line!(PaddedBool, core::sync::atomic::AtomicBool);
    assert_owns_line!(PaddedI32, core::sync::atomic::AtomicI32);
    assert_owns_line!(PaddedU32, core::sync::atomic::AtomicU32);
    assert_owns_line!(PaddedI64, core::sync::atomic::AtomicI64);
    assert_owns_line!(PaddedU64, core::sync::atomic::AtomicU64);
};
