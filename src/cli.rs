//! Command-line interface definitions for mailru_news.
//!
//! The scraped site is fixed; the CLI only chooses which page kind to fetch
//! and how to print it.

use clap::{Parser, Subcommand};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Headlines from the incident section
/// mailru_news
///
/// # One article, as JSON
/// mailru_news --json article https://news.mail.ru/incident/12345678/
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the headlines on the incident index (default)
    News,

    /// Print the body text of one article page
    Article {
        /// Absolute URL of the article page
        url: String,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to the headline listing.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::News)
    }
}
