use core::sync::atomic::AtomicU64;

use crate::concurrency::cache_padded::padded_atomic;

padded_atomic! {
    /// An `AtomicU64` that owns its cache line.
    ///
    /// Use this for high-contention counters updated from many threads.
    PaddedU64, AtomicU64, u64
}
