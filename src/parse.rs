use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, PageResult, Quote, Result};

const QUOTE_SELECTOR: &str = ".quote";
const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tag";
const NEXT_PAGE_SELECTOR: &str = ".next a";

/// Parses a fetched page on the blocking pool, the DOM can't cross an `.await` anyway.
pub async fn parse_page(raw: Vec<u8>) -> Result<PageResult> {
    let page = spawn_blocking(move || parse_html(&raw)).await??;
    Ok(page)
}

/// Attempts to parse the page, extracting every quote block in document order
/// and whether a "next" link is present.
pub fn parse_html(raw: &[u8]) -> Result<PageResult> {
    let html = std::str::from_utf8(raw)
        .map_err(|e| Error::Parse(format!("page is not valid UTF-8: {e}")))?;
    let doc = Html::parse_document(html);

    // Create selectors.
    let quote_selector = create_selector(QUOTE_SELECTOR)?;
    let text_selector = create_selector(TEXT_SELECTOR)?;
    let author_selector = create_selector(AUTHOR_SELECTOR)?;
    let tag_selector = create_selector(TAG_SELECTOR)?;
    let next_selector = create_selector(NEXT_PAGE_SELECTOR)?;

    // The site serves 10 quotes per page.
    let mut quotes = Vec::with_capacity(10);
    for (index, block) in doc.select(&quote_selector).enumerate() {
        let text = first_text(block, &text_selector).ok_or(Error::MissingField {
            field: "text",
            index,
        })?;
        let author = first_text(block, &author_selector).ok_or(Error::MissingField {
            field: "author",
            index,
        })?;
        let tags = block.select(&tag_selector).map(element_text).collect();

        quotes.push(Quote::new(text, author, tags));
    }

    let has_next_page = doc.select(&next_selector).next().is_some();

    Ok(PageResult {
        quotes,
        has_next_page,
    })
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|e| Error::Parse(format!("bad selector `{sel_str}`: {e}")))
}

fn first_text(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
    block.select(selector).next().map(element_text)
}

/// All the text nodes under the element, untrimmed.
#[inline]
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
