//! Console renderings of the extracted records.
//!
//! - [`listing`]: the human-readable headline listing and article text
//! - [`json`]: pretty-printed JSON for piping into other tools

pub mod json;
pub mod listing;
