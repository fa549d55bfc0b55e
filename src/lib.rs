//! QUOTES SCRAPER
//! Walks the paginated quotes site page by page until the "next" link disappears,
//! then dumps every quote into a single CSV file.

mod error;
mod macros;
pub mod parse;
pub mod process;
pub mod quote;
pub mod request;
pub mod write;

pub use error::{Error, Result};
pub use quote::{PageResult, Quote};

pub const BASE_URL: &str = "https://quotes.toscrape.com/";
pub const PAGE_PATH: &str = "page";
/// Used when no output path is given on the command line.
pub const DEFAULT_OUTPUT: &str = "quotes.csv";
const START_PAGE: usize = 1;

/// Where the pages live. Kept out of the fetcher so tests can point it at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub page_path: String,
}

impl ScrapeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_path: PAGE_PATH.into(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}
