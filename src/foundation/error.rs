/// Convenience result type used across gradsync.
pub type GradsyncResult<T> = Result<T, GradsyncError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Structurally odd gradient nodes are never reported here; the walker skips them.
/// Only root-level shape violations, caller preconditions and container decode
/// failures surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum GradsyncError {
    /// Traversal root is neither a mapping nor a sequence.
    #[error("invalid root: {0}")]
    InvalidRoot(String),

    /// A restore was requested without a reference document.
    #[error("missing reference: {0}")]
    MissingReference(String),

    /// Container bytes or JSON text could not be decoded.
    #[error("could not decode input: {0}")]
    Decode(String),

    /// Input decoded fine but carries no extractable gradient data.
    #[error("no usable gradient data: {0}")]
    NoGradientData(String),

    /// Errors when serializing a document for output.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl GradsyncError {
    /// Build a [`GradsyncError::InvalidRoot`] value.
    pub fn invalid_root(msg: impl Into<String>) -> Self {
        Self::InvalidRoot(msg.into())
    }

    /// Build a [`GradsyncError::MissingReference`] value.
    pub fn missing_reference(msg: impl Into<String>) -> Self {
        Self::MissingReference(msg.into())
    }

    /// Build a [`GradsyncError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GradsyncError::NoGradientData`] value.
    pub fn no_gradient_data(msg: impl Into<String>) -> Self {
        Self::NoGradientData(msg.into())
    }

    /// Build a [`GradsyncError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
