//! `GuardedValue` — atomic-style access to values of any shape.

use core::fmt;
use core::mem;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{DecodingError, EncodingError};

/// A value of any type behind a reader/writer lock, exposed through the same
/// `load` / `store` / `swap` vocabulary as the hardware atomics.
///
/// For `bool` and the fixed-width integers prefer the native atomics (or the
/// padded ones in [`concurrency::atomic`](crate::concurrency::atomic)). Reach
/// for `GuardedValue` when the value is a struct, a collection, a string, or
/// anything else no hardware atomic can hold, or when it has to travel through
/// serde.
///
/// Readers share the lock and writers take it exclusively, so a `load` never
/// observes a half-written value. Lock acquisition is the only point at which
/// a call can wait. The lock does not poison: a panic while it is held simply
/// releases it.
///
/// ```
/// use padlock::GuardedValue;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Config {
///     name: String,
///     workers: usize,
/// }
///
/// let config = GuardedValue::new(Config { name: "default".into(), workers: 4 });
/// config.store(Config { name: "tuned".into(), workers: 16 });
/// assert_eq!(config.load().workers, 16);
/// ```
///
/// There is intentionally no `PartialEq`: comparing two containers would mean
/// taking two locks and copying both values behind the caller's back. Compare
/// snapshots instead.
///
/// ```compile_fail
/// use padlock::GuardedValue;
///
/// let a = GuardedValue::new(1);
/// let b = GuardedValue::new(1);
/// assert!(a == b);
/// ```
pub struct GuardedValue<T> {
    value: RwLock<T>,
}

impl<T> GuardedValue<T> {
    /// Creates a container holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Returns a snapshot of the current value.
    ///
    /// The snapshot was current at some instant during the call; another
    /// thread may have replaced it by the time the caller looks at it.
    #[inline]
    pub fn load(&self) -> T
    where
        T: Clone,
    {
        self.value.read().clone()
    }

    /// Replaces the current value.
    ///
    /// The previous value is dropped after the lock has been released.
    #[inline]
    pub fn store(&self, value: T) {
        let _previous = self.swap(value);
    }

    /// Replaces the current value and returns the previous one as a single
    /// indivisible step.
    ///
    /// No other `store` or `swap` can slip in between the read of the old
    /// value and the write of the new one.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        mem::replace(&mut *self.value.write(), value)
    }

    /// Alias for [`load`](Self::load).
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.load()
    }

    /// Alias for [`store`](Self::store).
    #[inline]
    pub fn set(&self, value: T) {
        self.store(value);
    }

    /// Returns a mutable reference to the value.
    ///
    /// No locking happens: the `&mut self` borrow already proves exclusivity.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the container, returning the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Encodes the current value as JSON.
    ///
    /// The bytes are exactly the value's own encoding; nothing about the
    /// container or its lock appears in the output.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the value cannot be represented as JSON.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError>
    where
        T: Serialize,
    {
        serde_json::to_vec(&*self.value.read()).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(ty = core::any::type_name::<T>(), error = %err, "encode failed");
            EncodingError::new(err)
        })
    }

    /// Decodes `bytes` as JSON and, on success, replaces the current value
    /// with the result.
    ///
    /// Decoding happens before the write lock is taken, so readers are not
    /// held up by parsing and a failed decode never touches the held value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError`] if `bytes` are not valid JSON or do not match
    /// the shape of `T`. The current value is left unchanged.
    pub fn decode(&self, bytes: &[u8]) -> Result<(), DecodingError>
    where
        T: DeserializeOwned,
    {
        let value = serde_json::from_slice(bytes).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(ty = core::any::type_name::<T>(), error = %err, "decode failed");
            DecodingError::new(err)
        })?;
        self.store(value);

        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<T>(), len = bytes.len(), "decoded value");
        Ok(())
    }
}

impl<T: Default> Default for GuardedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for GuardedValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for GuardedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("GuardedValue");
        match self.value.try_read() {
            Some(guard) => d.field("value", &&*guard),
            None => d.field("value", &format_args!("<locked>")),
        };
        d.finish()
    }
}

impl<T: Serialize> Serialize for GuardedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.read().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GuardedValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(feature = "proptest")]
impl<T: proptest::arbitrary::Arbitrary> proptest::arbitrary::Arbitrary for GuardedValue<T> {
    type Parameters = T::Parameters;
    type Strategy = proptest::strategy::Map<T::Strategy, fn(T) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        T::arbitrary_with(args).prop_map(Self::new as fn(T) -> Self)
    }
}
