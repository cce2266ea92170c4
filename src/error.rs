//! Error types for fetching and extracting news.mail.ru pages.
//!
//! Callers of the download functions only see "result or no result"; the
//! typed variants exist so the fetch path can log precisely and so tests can
//! tell the failure kinds apart.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS or body-transfer failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any status other than 200 OK.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be turned into a document.
    #[error("invalid HTML: {0}")]
    Parse(String),

    /// An inline style declaration without a `url(...)` group.
    #[error("no url(...) in style declaration {0:?}")]
    StyleUrl(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
