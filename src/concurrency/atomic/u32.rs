use core::sync::atomic::AtomicU32;

use crate::concurrency::cache_padded::padded_atomic;

padded_atomic! {
    /// An `AtomicU32` that owns its cache line.
    PaddedU32, AtomicU32, u32
}
