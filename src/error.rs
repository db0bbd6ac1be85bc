use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, SvocabError>;

/// Enum representing all possible errors in the svocab_rs library.
#[derive(Error, Debug)]
pub enum SvocabError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response body is not a callback envelope (no parenthesized payload)")]
    CallbackEnvelope,

    #[error("Malformed word list line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Unrecognized part of speech: {0}")]
    UnknownPartOfSpeech(String),
}
