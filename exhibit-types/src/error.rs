//! Error types for exposure registration and value resolution.

use thiserror::Error;

/// Result type for entity operations.
pub type Result<T> = std::result::Result<T, EntityError>;

/// Errors raised while declaring exposures or building a representation.
#[derive(Debug, Error)]
pub enum EntityError {
    /// A declaration combines options that cannot apply to it.
    #[error("invalid exposure declaration: {0}")]
    InvalidExposureDeclaration(String),

    /// The domain object has no accessor for the attribute.
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    /// The attribute yields a nested object but nothing says how to represent it.
    #[error("attribute `{0}` holds a nested object and has no delegate entity")]
    NestedWithoutDelegate(String),

    /// A field could not be converted into a value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Raised by a caller-supplied computation or predicate.
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

impl EntityError {
    /// Shorthand for [`EntityError::MissingAttribute`].
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute(attribute.into())
    }

    /// Shorthand for [`EntityError::InvalidExposureDeclaration`].
    pub fn invalid_declaration(reason: impl Into<String>) -> Self {
        Self::InvalidExposureDeclaration(reason.into())
    }
}
