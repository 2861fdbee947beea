use core::sync::atomic::AtomicI64;

use crate::concurrency::cache_padded::padded_atomic;

padded_atomic! {
    /// An `AtomicI64` that owns its cache line.
    PaddedI64, AtomicI64, i64
}
