//! Error types for card generation.
//!
//! Transient fetch failures never surface here; they are absorbed by the
//! fetcher and show up as absent fields. Everything in [`CardError`] aborts
//! the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    /// No API token was supplied
    #[error("{var} not set; cannot authenticate against the profile API")]
    MissingToken { var: &'static str },

    /// One or more critical fields were absent after extraction
    #[error("{count} critical field(s) missing; card not generated")]
    CriticalFields { count: usize, errors: Vec<String> },

    /// State file could not be persisted
    #[error("Failed to write state file {path}: {source}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output document could not be written
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page the pipeline cannot do without was unreachable
    #[error("Page unavailable: {url}")]
    PageUnavailable { url: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
