//! Fatal error taxonomy for a batch run.
//!
//! Every variant aborts the run: there is no retry or per-feed recovery.
//! Variants carry enough context (path or URL) that the top-level message
//! printed by `main` is actionable on its own.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error that terminates a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Required API key env var is unset or empty. Raised before any I/O.
    #[error("missing {var} environment variable. Set it and retry")]
    MissingApiKey { var: &'static str },

    /// Catalog file could not be read (missing, unreadable).
    #[error("failed to read catalog {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is not the expected JSON structure.
    #[error("failed to parse catalog {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog content violates an assumption (e.g. http source without a name).
    #[error("invalid catalog: {reason}")]
    CatalogInvalid { reason: String },

    /// Curl reported a request failure (connection error, timeout, bad URL).
    #[error("request for {url} failed")]
    Request {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Response completed with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// Could not write a downloaded archive to disk.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Could not serialize or write the mapping file.
    #[error("failed to write mapping {path}")]
    MappingWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
