//! Error types for yandex-serp.
//!
//! A not-found page is not an error: it yields a zero-result record. An
//! undetermined result count is `None`, not an error either.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A result item or form lacks the markup the extractor relies on.
    #[error("SERP parse error: {0}")]
    ParseError(String),

    /// Malformed text while decoding a URL or normalizing a domain.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// A normal-looking page yielded no organic snippets.
    #[error("No organic snippets found on a non-empty SERP")]
    EmptySerp,

    /// The CAPTCHA checkpoint marker is present but no challenge image matched.
    #[error("CAPTCHA page without a recognizable challenge image")]
    CaptchaImageNotFound,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
