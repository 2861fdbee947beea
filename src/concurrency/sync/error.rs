use core::fmt;

/// Error returned by [`GuardedValue::encode`](super::GuardedValue::encode).
///
/// Raised when the held value cannot be represented as JSON, for example a map
/// with non-string keys or a custom `Serialize` impl that reports an error.
#[derive(Debug)]
pub struct EncodingError {
    source: serde_json::Error,
}

impl EncodingError {
    pub(super) fn new(source: serde_json::Error) -> Self {
        Self { source }
    }

    /// Returns the underlying `serde_json` error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.source
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to encode guarded value: {}", self.source)
    }
}

impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error returned by [`GuardedValue::decode`](super::GuardedValue::decode).
///
/// The input was not valid JSON, or was valid JSON of the wrong shape for the
/// target type. The container is left holding its previous value.
#[derive(Debug)]
pub struct DecodingError {
    source: serde_json::Error,
}

impl DecodingError {
    pub(super) fn new(source: serde_json::Error) -> Self {
        Self { source }
    }

    /// One-based line of the input where decoding stopped.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the input where decoding stopped.
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// The input was not syntactically valid JSON.
    pub fn is_syntax(&self) -> bool {
        self.source.is_syntax()
    }

    /// The input was valid JSON but did not match the target type.
    pub fn is_data(&self) -> bool {
        self.source.is_data()
    }

    /// The input ended before a complete value was read.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the underlying `serde_json` error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.source
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode guarded value: {}", self.source)
    }
}

impl std::error::Error for DecodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
