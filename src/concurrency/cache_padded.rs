//! Cache-line layout helpers shared by the padded atomics.

/// Size in bytes of the cache line the padded types are laid out for.
///
/// 64 bytes covers x86-64 and most ARM cores.
pub const CACHE_LINE_SIZE: usize = 64;

/// Number of filler bytes needed so that `size` bytes plus the filler end on a
/// cache-line boundary.
///
/// Returns `0` when `size` is already a whole multiple of [`CACHE_LINE_SIZE`].
#[inline]
pub const fn padding_for(size: usize) -> usize {
    (CACHE_LINE_SIZE - size % CACHE_LINE_SIZE) % CACHE_LINE_SIZE
}

/// Declares a padded wrapper around a native atomic scalar.
///
/// The scalar sits between two filler arrays of `padding_for(size_of::<atomic>())`
/// bytes and the whole struct is aligned to a cache line, so the scalar is
/// alone on its line no matter what is placed before or after it.
macro_rules! padded_atomic {
    ($(#[$meta:meta])* $name:ident, $atomic:ty, $scalar:ty) => {
        $(#[$meta])*
        #[repr(C, align(64))]
        pub struct $name {
            _head: [u8; $crate::concurrency::cache_padded::padding_for(
                ::core::mem::size_of::<$atomic>(),
            )],
            inner: $atomic,
            _tail: [u8; $crate::concurrency::cache_padded::padding_for(
                ::core::mem::size_of::<$atomic>(),
            )],
        }

        impl $name {
            const PAD: usize =
                $crate::concurrency::cache_padded::padding_for(::core::mem::size_of::<$atomic>());

            /// Creates a new padded atomic holding `value`.
            #[inline]
            pub const fn new(value: $scalar) -> Self {
                Self {
                    _head: [0; Self::PAD],
                    inner: <$atomic>::new(value),
                    _tail: [0; Self::PAD],
                }
            }

            /// Consumes the wrapper, returning the contained value.
            #[inline]
            pub fn into_inner(self) -> $scalar {
                self.inner.into_inner()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(<$scalar>::default())
            }
        }

        impl From<$scalar> for $name {
            #[inline]
            fn from(value: $scalar) -> Self {
                Self::new(value)
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $atomic;

            #[inline]
            fn deref(&self) -> &$atomic {
                &self.inner
            }
        }

        impl ::core::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut $atomic {
                &mut self.inner
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.inner.load(::core::sync::atomic::Ordering::Relaxed))
                    .finish()
            }
        }
    };
}

pub(crate) use padded_atomic;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_partial_lines() {
        assert_eq!(padding_for(1), 63);
        assert_eq!(padding_for(4), 60);
        assert_eq!(padding_for(8), 56);
        assert_eq!(padding_for(65), 63);
    }

    #[test]
    fn padding_is_zero_for_whole_lines() {
        assert_eq!(padding_for(0), 0);
        assert_eq!(padding_for(CACHE_LINE_SIZE), 0);
        assert_eq!(padding_for(CACHE_LINE_SIZE * 3), 0);
    }
}
