//! Plain-text rendering for the terminal.

use crate::models::{Article, Item};

/// Render the headline listing, one numbered entry per item:
///
/// ```text
/// [1] Headline
///     Photo: https://news.mail.ru/incident/1/
/// ```
///
/// The second line is tab-indented and shows the item's link.
pub fn format_items(items: &[Item]) -> String {
    let mut out = String::new();
    for (n, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "[{}] {}\n\tPhoto: {}\n",
            n + 1,
            item.title,
            item.reference
        ));
    }
    out
}

/// Render an article: its title line when one is known, then the text.
pub fn format_article(article: &Article) -> String {
    let mut out = String::new();
    if !article.title.is_empty() {
        out.push_str(&article.title);
        out.push_str("\n\n");
    }
    out.push_str(&article.text);
    out.push('\n');
    out
}
