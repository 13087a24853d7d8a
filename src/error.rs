use thiserror::Error;

#[derive(Error, Debug)]
pub enum LirikError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid codebook: {0}")]
    Validation(String),

    #[error("Unknown codebook token in text: '{0}'")]
    UnknownToken(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Self-test failed: {0}")]
    SelfTestFailed(String),
}

impl LirikError {
    /// Load-time failure of a codebook (coverage, uniqueness, alphabet kind)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Json(_))
    }

    /// Decode-time failure: unknown token or a payload that cannot be rebuilt
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownToken(_) | Self::MalformedPayload(_) | Self::InvalidUtf8(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LirikError>;
