//! Headline cards from the news.mail.ru incident index.
//!
//! The index lays its cards out in a grid row:
//!
//! ```text
//! div.grid__row grid__row_height_240
//! └── div.grid__item ...            (one per card)
//!     └── div
//!         └── a[href]
//!             ├── div.photo__inner
//!             │   └── *[style="background-image:url(...)"]
//!             └── span.photo__captions
//!                 └── span
//!                     └── "headline text"
//! ```
//!
//! The first grid row in document order that yields a card is read; a row
//! with no readable card is passed over. Cards that deviate from this shape
//! are dropped one by one without failing the listing.

use crate::dom::{attr, children, is_class, is_element, text_of};
use crate::models::Item;
use crate::scrapers::{ORIGIN, fetch_and_search};
use crate::utils::parse_style_url;
use ego_tree::NodeRef;
use reqwest::Client;
use scraper::Node;
use tracing::{debug, info, instrument, warn};

/// The incident section index page.
pub const NEWS_INDEX_URL: &str = "https://news.mail.ru/incident/";

const GRID_ROW_CLASS: &str = "grid__row grid__row_height_240";
const GRID_ITEM_CLASS: &str =
    "grid__item grid__item_small_percent-50 grid__item_medium_percent-50 grid__item_large_percent-50";

/// Download the index page at `url` and extract its headline cards.
///
/// `None` when the page could not be fetched or no grid row holds a
/// well-formed card; otherwise the cards of the first row that does.
#[instrument(level = "info", skip(client))]
pub async fn download_news(client: &Client, url: &str) -> Option<Vec<Item>> {
    let items = fetch_and_search(client, url, |document| {
        let items = search(document.tree.root());
        if items.is_none() {
            warn!("No news cards found; page layout may have changed");
        }
        items
    })
    .await?;

    info!(count = items.len(), "Extracted news items");
    Some(items)
}

/// Depth-first pre-order search for the first grid row with readable cards.
///
/// A row that yields no card counts as a miss: its own children are not
/// searched, but the walk moves on to the nodes after it.
pub fn search(node: NodeRef<'_, Node>) -> Option<Vec<Item>> {
    if is_class(node, "div", GRID_ROW_CLASS) {
        let items: Vec<Item> = children(node)
            .filter(|cell| is_class(*cell, "div", GRID_ITEM_CLASS))
            .filter_map(read_item)
            .collect();
        return (!items.is_empty()).then_some(items);
    }
    children(node).find_map(search)
}

/// Extract one card from a grid cell, or `None` if it has another shape.
pub fn read_item(cell: NodeRef<'_, Node>) -> Option<Item> {
    let anchor = cell.first_child()?.first_child()?;
    if !is_element(anchor, "a") {
        return None;
    }

    let parts: Vec<_> = children(anchor).collect();
    let [photo, captions] = parts.as_slice() else {
        return None;
    };
    if !is_class(*photo, "div", "photo__inner") || !is_class(*captions, "span", "photo__captions")
    {
        return None;
    }

    let href = attr(anchor, "href");
    let reference = ORIGIN
        .join(href)
        .inspect_err(|e| debug!(href, error = %e, "Skipping card with unresolvable link"))
        .ok()?;

    let style = attr(photo.first_child()?, "style");
    let image = parse_style_url(style)
        .inspect_err(|e| debug!(error = %e, "Skipping card without thumbnail"))
        .ok()?;

    let title = captions.first_child()?.first_child().and_then(text_of)?;

    Some(Item {
        reference: reference.to_string(),
        image: image.to_string(),
        title: title.to_string(),
    })
}
