use reqwest::{StatusCode, Url};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarsError {
    #[error("request to {url} failed with HTTP {status}: {body}")]
    Http {
        status: StatusCode,
        url: Url,
        body: String,
    },

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
