/// Convenience result type used across Marquee.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Top-level error taxonomy used by toolkit APIs.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Invalid caller-provided data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed serialized values such as CSS transform strings.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed term graphs: cycles or runaway parent chains.
    #[error("taxonomy error: {0}")]
    Taxonomy(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`MarqueeError::Taxonomy`] value.
    pub fn taxonomy(msg: impl Into<String>) -> Self {
        Self::Taxonomy(msg.into())
    }

    /// Build a [`MarqueeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
