//! # mailru_news
//!
//! Scrapes the news.mail.ru incident section: the index page's headline
//! cards, or the body text of a single article, matched against the site's
//! current markup.
//!
//! ## Usage
//!
//! ```sh
//! mailru_news                       # numbered headline listing
//! mailru_news article <URL>         # article body text
//! mailru_news --json                # same data as JSON
//! ```
//!
//! ## Flow
//!
//! 1. **Fetching**: one GET for the requested page
//! 2. **Searching**: locate the page's container node and extract records
//! 3. **Output**: print a listing (or JSON) to stdout; logs go to stderr
//!
//! A page that cannot be fetched or no longer has the expected layout is
//! logged and produces no output.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dom;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::{Cli, Command};
use outputs::{json, listing};
use scrapers::{article::download_article, index::NEWS_INDEX_URL, index::download_news};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let client = Client::new();
    match args.command() {
        Command::News => {
            info!("Download started");
            let Some(items) = download_news(&client, NEWS_INDEX_URL).await else {
                warn!(url = NEWS_INDEX_URL, "No news items available");
                return Ok(());
            };
            if args.json {
                println!("{}", json::to_json(&items)?);
            } else {
                print!("{}", listing::format_items(&items));
            }
        }
        Command::Article { url } => {
            let Some(article) = download_article(&client, &url).await else {
                warn!(%url, "No article text available");
                return Ok(());
            };
            if args.json {
                println!("{}", json::to_json(&article)?);
            } else {
                print!("{}", listing::format_article(&article));
            }
        }
    }

    Ok(())
}
