use core::sync::atomic::AtomicI32;

use crate::concurrency::cache_padded::padded_atomic;

padded_atomic! {
    /// An `AtomicI32` that owns its cache line.
    PaddedI32, AtomicI32, i32
}
