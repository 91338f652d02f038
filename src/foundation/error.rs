/// Convenience result type used at fieldfx's configuration boundary.
pub type FieldFxResult<T> = Result<T, FieldFxError>;

/// Error taxonomy for loading and validating lifecycle documents.
///
/// Evaluation itself never fails; these errors only surface where external data enters the crate.
#[derive(thiserror::Error, Debug)]
pub enum FieldFxError {
    /// Structurally valid data that breaks a lifecycle invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that cannot be interpreted at all.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldFxError {
    /// Build a [`FieldFxError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FieldFxError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FieldFxError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FieldFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
