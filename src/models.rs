//! Records extracted from news.mail.ru pages.
//!
//! - [`Item`]: one headline card from the news index
//! - [`Article`]: the body text of a single article page

use serde::{Deserialize, Serialize};

/// A headline card from the news index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    /// Absolute URL of the article the card links to.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Thumbnail URL taken from the card's inline `background-image`.
    pub image: String,
    /// Headline text.
    pub title: String,
}

/// The body of a single article page.
///
/// `title` is part of the record but nothing on the article page is mapped
/// to it yet, so it is always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    /// Paragraph text concatenated in document order.
    pub text: String,
}
