/// Convenience result type used across linecircle.
pub type LineCircleResult<T> = Result<T, LineCircleError>;

/// Top-level error taxonomy used by the crate APIs.
///
/// Idempotent no-ops (a tap while running, a stale tick) and chain boundary exhaustion are
/// normal transitions and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum LineCircleError {
    /// Invalid configuration, such as an empty chain or a malformed colour.
    #[error("validation error: {0}")]
    Validation(String),

    /// A sweep that failed to settle or another sequencing fault.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors raised by a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LineCircleError {
    /// Build a [`LineCircleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LineCircleError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`LineCircleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LineCircleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
