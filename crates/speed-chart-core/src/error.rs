// File: crates/speed-chart-core/src/error.rs
// Summary: Errors raised while fetching and parsing the source CSV.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed CSV header: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),
}
