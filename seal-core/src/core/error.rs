use thiserror::Error;

/// Universal error type for seal rendering.
///
/// Every failure that can happen between receiving a request and flushing the
/// canvas to disk maps onto one of these variants. The composer converts them
/// into a failed [`SealStatus`](crate::core::SealStatus) at its boundary.
#[derive(Debug, Error)]
pub enum SealError {
    /// The request is missing a field or carries an unusable value.
    /// Raised before any drawing happens.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The font provider cannot measure or outline a character.
    #[error("no glyph for {ch:?} in font '{family}'")]
    MetricsUnavailable { ch: char, family: String },

    /// Font bytes could not be parsed as a font face
    #[error("failed to load font: {0}")]
    FontLoad(String),

    /// Canvas allocation or image encoding failed
    #[error("rendering error: {0}")]
    Rendering(String),

    /// Output path not writable, font file unreadable, ...
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SealError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SealError::InvalidRequest(msg.into())
    }

    pub(crate) fn missing_glyph(ch: char, family: &str) -> Self {
        SealError::MetricsUnavailable {
            ch,
            family: family.to_string(),
        }
    }
}

/// Result type alias for seal operations
pub type SealResult<T> = Result<T, SealError>;
