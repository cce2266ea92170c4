//! Body text of a single news.mail.ru article page.
//!
//! The article body lives in one container whose direct children are content
//! blocks; only the blocks that open with a paragraph contribute text.

use crate::dom::{children, find_first, is_class, is_element, is_text, text_of};
use crate::models::Article;
use crate::scrapers::fetch_and_search;
use crate::utils::truncate_for_log;
use ego_tree::NodeRef;
use reqwest::Client;
use scraper::Node;
use tracing::{debug, info, instrument, warn};

const ARTICLE_CLASS: &str = "article__text js-module js-view js-mediator-article js-smoky-links";
const CONTENT_ITEM_CLASS: &str = "article__item article__item_alignment_left article__item_html";

/// Download the article page at `url` and extract its body text.
#[instrument(level = "info", skip(client))]
pub async fn download_article(client: &Client, url: &str) -> Option<Article> {
    let article = fetch_and_search(client, url, |document| {
        let article = scan_article(document.tree.root());
        if article.is_none() {
            warn!("Article body not found; page layout may have changed");
        }
        article
    })
    .await?;

    info!(chars = article.text.chars().count(), "Extracted article text");
    debug!(preview = %truncate_for_log(&article.text, 200), "Article text");
    Some(article)
}

/// Find the first article body at or below `root` and collect its text.
pub fn scan_article(root: NodeRef<'_, Node>) -> Option<Article> {
    find_first(root, |node| {
        is_class(node, "div", ARTICLE_CLASS).then(|| read_body(node))
    })
}

fn read_body(container: NodeRef<'_, Node>) -> Article {
    let mut article = Article::default();
    let paragraphs = children(container)
        .filter(|block| is_class(*block, "div", CONTENT_ITEM_CLASS))
        .filter_map(|block| block.first_child())
        .filter(|first| is_element(*first, "p"));

    for paragraph in paragraphs {
        for piece in children(paragraph) {
            let source = if is_text(piece) {
                Some(piece)
            } else if is_element(piece, "nobr") {
                piece.first_child().filter(|first| is_text(*first))
            } else {
                None
            };
            if let Some(text) = source.and_then(text_of) {
                article.text.push_str(text);
            }
        }
    }
    article
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn block(inner: &str) -> String {
        format!(r#"<div class="{CONTENT_ITEM_CLASS}">{inner}</div>"#)
    }

    fn body(blocks: &[String]) -> String {
        format!(r#"<div class="{ARTICLE_CLASS}">{}</div>"#, blocks.concat())
    }

    fn page(content: &str) -> Html {
        Html::parse_document(&format!("<html><body>{content}</body></html>"))
    }

    #[test]
    fn test_text_and_nobr_are_concatenated() {
        let doc = page(&body(&[
            block("<p>Damage reached <nobr>10 000</nobr> rubles<b> (bold)</b>.<nobr><i>skip</i></nobr></p>"),
            block("<p>Second paragraph.</p>"),
        ]));
        let article = scan_article(doc.tree.root()).unwrap();

        assert_eq!(article.text, "Damage reached 10 000 rubles.Second paragraph.");
        assert!(article.title.is_empty());
    }

    #[test]
    fn test_blocks_not_starting_with_paragraph_are_skipped() {
        let doc = page(&body(&[
            block("<span>caption</span><p>hidden</p>"),
            block("<p>kept</p>"),
            r#"<div class="article__item article__item_incut"><p>ad</p></div>"#.to_string(),
            "<p>loose</p>".to_string(),
        ]));
        let article = scan_article(doc.tree.root()).unwrap();

        assert_eq!(article.text, "kept");
    }

    #[test]
    fn test_container_without_blocks_gives_empty_article() {
        let doc = page(&body(&[]));
        assert_eq!(scan_article(doc.tree.root()), Some(Article::default()));
    }

    #[test]
    fn test_first_container_wins() {
        let content = format!(
            "{}<section>{}</section>",
            body(&[block("<p>first</p>")]),
            body(&[block("<p>second</p>")]),
        );
        let doc = page(&content);

        assert_eq!(scan_article(doc.tree.root()).unwrap().text, "first");
    }

    #[test]
    fn test_container_class_must_match_exactly() {
        let content = format!(
            r#"<div class="article__text js-module">{}</div>"#,
            block("<p>text</p>")
        );
        let doc = page(&content);

        assert!(scan_article(doc.tree.root()).is_none());
    }

    #[tokio::test]
    async fn test_download_article() {
        let mock_server = MockServer::start().await;
        let html = format!(
            "<html><body>{}</body></html>",
            body(&[block("<p>Police said <nobr>on Monday</nobr> that...</p>")])
        );
        Mock::given(method("GET"))
            .and(path("/incident/123/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&mock_server)
            .await;

        let url = format!("{}/incident/123/", mock_server.uri());
        let article = download_article(&Client::new(), &url).await.unwrap();

        assert_eq!(article.text, "Police said on Monday that...");
    }

    #[tokio::test]
    async fn test_download_article_not_found_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/incident/404/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/incident/404/", mock_server.uri());
        assert!(download_article(&Client::new(), &url).await.is_none());
    }
}
