use std::path::Path;

use chrono::Local;
use tracing::debug;

use crate::parse::parse_page;
use crate::request::{FetchPage, PageFetcher};
use crate::write::write_quotes;
use crate::{info_time, Quote, Result, ScrapeConfig, START_PAGE};

/// Scrapes the whole site and writes every quote to `output`.
/// Nothing is written unless every page was fetched and parsed.
/// Returns the number of rows written, header excluded.
pub async fn run(config: &ScrapeConfig, output: &Path) -> Result<usize> {
    let start_time = Local::now();
    info_time!("Started scraping {}", config.base_url);

    let fetcher = PageFetcher::new(config)?;
    let quotes = collect_all(&fetcher).await?;
    info_time!(start_time, "Finished COLLECTING: {} quotes", quotes.len());

    let local_now = Local::now();
    write_quotes(&quotes, output).await?;
    info_time!(local_now, "Wrote the results to file: {}", output.display());

    Ok(quotes.len())
}

/// Walks the pages from the first one, one at a time, until a page has no "next" link.
/// Quotes keep page order and, within a page, document order.
///
/// There is no page cap: a site that always links a next page keeps this looping.
/// Any fetch or parse error aborts the walk and drops what was collected.
pub async fn collect_all<F: FetchPage>(fetcher: &F) -> Result<Vec<Quote>> {
    let mut quotes = Vec::new();
    let mut page_num = START_PAGE;

    loop {
        let start_page_time = Local::now();
        let raw = fetcher.fetch(page_num).await?;
        debug!(page_num, bytes = raw.len(), "fetched page");

        let page = parse_page(raw).await?;
        info_time!(
            start_page_time,
            "Processed page {}: {} quotes",
            page_num,
            page.quotes.len()
        );
        quotes.extend(page.quotes);
        page_num += 1;

        if !page.has_next_page {
            break;
        }
    }

    Ok(quotes)
}
