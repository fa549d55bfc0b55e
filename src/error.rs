use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest Error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Page numbers start at 1, got: {0}")]
    InvalidPage(usize),

    #[error("Couldn't parse the page: {0}")]
    Parse(String),
    #[error("Quote block #{index} is missing its `{field}` element")]
    MissingField { field: &'static str, index: usize },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
}
