use core::sync::atomic::AtomicBool;

use crate::concurrency::cache_padded::padded_atomic;

padded_atomic! {
    /// An `AtomicBool` that owns its cache line.
    ///
    /// Suited to stop/shutdown flags polled by many threads while a neighbouring
    /// field is being written.
    PaddedBool, AtomicBool, bool
}
