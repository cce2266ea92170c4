//! news.mail.ru page scrapers.
//!
//! Both page kinds go through the same fetch path, [`fetch_and_search`]:
//!
//! 1. **Fetching**: one GET; anything but `200 OK` ends the attempt
//! 2. **Searching**: the parsed document is handed to a page-specific tree
//!    search that looks for one container by tag and exact class string
//!
//! | Page | Module | Container |
//! |------|--------|-----------|
//! | Incident index | [`index`] | `div.grid__row grid__row_height_240` |
//! | Article | [`article`] | `div.article__text ...` |
//!
//! Failures are logged and collapse to `None`; nothing is retried.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::Html;
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod article;
pub mod index;

/// Origin that relative links on the site are resolved against.
pub const SITE_ORIGIN: &str = "https://news.mail.ru";

pub(crate) static ORIGIN: Lazy<Url> =
    Lazy::new(|| Url::parse(SITE_ORIGIN).expect("SITE_ORIGIN is a valid absolute URL"));

/// Download `url` and parse it into a document.
///
/// # Errors
///
/// - [`Error::Transport`] when the request cannot be made
/// - [`Error::Status`] for any status but 200; the body is left unread
/// - [`Error::Parse`] when the body cannot be read or is not UTF-8
///
/// The site serves UTF-8; bodies in other charsets are not transcoded.
#[instrument(level = "info", skip(client))]
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html> {
    info!("Sending request to news.mail.ru");
    let response = client.get(url).send().await?;

    let status = response.status();
    info!(status = status.as_u16(), "Got response from news.mail.ru");
    if status != StatusCode::OK {
        return Err(Error::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Parse(format!("failed to read body: {e}")))?;
    let html = std::str::from_utf8(&body).map_err(|e| Error::Parse(e.to_string()))?;

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(
            recovered = document.errors.len(),
            "Parser recovered from markup errors"
        );
    }
    Ok(document)
}

/// Fetch `url` and run `search` over the document.
///
/// Every failure is logged here and reported to the caller as `None`.
pub async fn fetch_and_search<T>(
    client: &Client,
    url: &str,
    search: impl FnOnce(&Html) -> Option<T>,
) -> Option<T> {
    match fetch_document(client, url).await {
        Ok(document) => search(&document),
        Err(Error::Status(status)) => {
            debug!(%url, status, "Skipping non-OK response");
            None
        }
        Err(e @ Error::Parse(_)) => {
            error!(%url, error = %e, "Invalid HTML from news.mail.ru");
            None
        }
        Err(e) => {
            error!(%url, error = %e, "Request to news.mail.ru failed");
            None
        }
    }
}
