//! Lock-based containers.

mod error;
mod guarded;

pub use error::{DecodingError, EncodingError};
pub use guarded::GuardedValue;
