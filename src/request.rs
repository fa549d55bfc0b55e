use std::future::Future;

use reqwest::Client;
use tracing::{debug, warn};

use crate::{Error, Result, ScrapeConfig, START_PAGE};

/// Anything that can hand over the raw markup of a page by its number.
pub trait FetchPage {
    fn fetch(&self, page_num: usize) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Fetches pages over HTTP, one GET per call, nothing cached.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    page_url: String,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        let page_url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.page_path.trim_matches('/')
        );
        Ok(Self { client, page_url })
    }

    pub fn page_url(&self, page_num: usize) -> String {
        format!("{}/{page_num}", self.page_url)
    }
}

impl FetchPage for PageFetcher {
    /// Requests a page and returns the body bytes untouched.
    /// The status code is only logged; an error page is handed to the parser like any other.
    fn fetch(&self, page_num: usize) -> impl Future<Output = Result<Vec<u8>>> + Send {
        // Client uses Arc so we can clone cheaply
        let client = self.client.clone();
        let url = self.page_url(page_num);

        async move {
            if page_num < START_PAGE {
                return Err(Error::InvalidPage(page_num));
            }

            debug!(%url, "requesting page");
            let res = client.get(&url).send().await?;
            let status = res.status();
            if !status.is_success() {
                warn!(%url, %status, "page responded with a non-success status");
            }
            let body = res.bytes().await?;
            Ok(body.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_default_site() {
        let fetcher = PageFetcher::new(&ScrapeConfig::default()).unwrap();
        assert_eq!(fetcher.page_url(1), "https://quotes.toscrape.com/page/1");
        assert_eq!(fetcher.page_url(10), "https://quotes.toscrape.com/page/10");
    }

    #[test]
    fn test_page_url_collapses_separators() {
        let config = ScrapeConfig {
            base_url: "http://127.0.0.1:3000".into(),
            page_path: "/page/".into(),
        };
        let fetcher = PageFetcher::new(&config).unwrap();
        assert_eq!(fetcher.page_url(2), "http://127.0.0.1:3000/page/2");
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected_before_requesting() {
        // Nothing listens on port 9, so a request would fail with a network error instead.
        let fetcher = PageFetcher::new(&ScrapeConfig::new("http://127.0.0.1:9")).unwrap();
        let err = fetcher.fetch(0).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPage(0)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let fetcher = PageFetcher::new(&ScrapeConfig::new("http://127.0.0.1:9")).unwrap();
        let err = fetcher.fetch(1).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
