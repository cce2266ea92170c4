//! JSON rendering of extracted records.

use crate::error::Result;
use serde::Serialize;
use tracing::instrument;

/// Serialize `value` as pretty-printed JSON.
#[instrument(level = "debug", skip_all)]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Item};

    #[test]
    fn test_items_to_json() {
        let items = vec![Item {
            reference: "https://news.mail.ru/incident/1/".to_string(),
            image: "https://img/1.jpg".to_string(),
            title: "Fire downtown".to_string(),
        }];

        let json = to_json(&items).unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
        assert!(json.contains("\"ref\""));
    }

    #[test]
    fn test_empty_listing_is_empty_array() {
        let items: Vec<Item> = vec![];
        assert_eq!(to_json(&items).unwrap(), "[]");
    }

    #[test]
    fn test_article_to_json() {
        let article = Article {
            title: String::new(),
            text: "Body".to_string(),
        };

        let json = to_json(&article).unwrap();
        assert!(json.contains("\"title\": \"\""));
        assert!(json.contains("\"text\": \"Body\""));
    }
}
