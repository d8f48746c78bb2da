//! Run configuration: API key from the environment, paths from the CLI.
//!
//! The key is resolved once at startup and passed down explicitly; nothing
//! reads the environment after this point.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::BatchError;

/// Env var holding the NAP API key sent with every request.
pub const API_KEY_VAR: &str = "NAP_API_KEY";

/// Fixed connect/total timeout per request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Write buffer size for streaming response bodies to disk.
pub const WRITE_BUFFER_BYTES: usize = 8192;

/// Options for a single feed fetch: credentials and transfer limits.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Value sent as the `ApiKey` request header.
    pub api_key: String,
    /// Connect and total transfer timeout.
    pub timeout: Duration,
    /// Disk write buffer size in bytes.
    pub buffer_size: usize,
}

impl FetchOptions {
    /// Resolve fetch options from the environment. Fails if `NAP_API_KEY` is
    /// unset or empty; callers must do this before touching the catalog so a
    /// misconfigured run performs no I/O at all.
    pub fn from_env() -> Result<Self, BatchError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(BatchError::MissingApiKey { var: API_KEY_VAR })?;
        Ok(Self {
            api_key,
            timeout: REQUEST_TIMEOUT,
            buffer_size: WRITE_BUFFER_BYTES,
        })
    }
}

/// Full configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Local NAP catalog file (JSON with a `sources` array).
    pub catalog_path: PathBuf,
    /// Where the generated mapping file is written.
    pub output_path: PathBuf,
    /// Directory that receives the downloaded `es_<name>.zip` archives.
    pub download_dir: PathBuf,
    /// Transfer options shared by every download.
    pub fetch: FetchOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> FetchOptions {
        FetchOptions {
            api_key: "k".into(),
            timeout: REQUEST_TIMEOUT,
            buffer_size: WRITE_BUFFER_BYTES,
        }
    }

    #[test]
    fn fetch_options_defaults() {
        let opts = test_options();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.buffer_size, 8192);
    }

    #[test]
    fn from_env_unset_empty_and_set() {
        // Single test covering all three states: set_var is process-global
        // and parallel tests sharing the var would race.
        std::env::remove_var(API_KEY_VAR);
        assert!(matches!(
            FetchOptions::from_env(),
            Err(BatchError::MissingApiKey { .. })
        ));

        std::env::set_var(API_KEY_VAR, "");
        assert!(matches!(
            FetchOptions::from_env(),
            Err(BatchError::MissingApiKey { .. })
        ));

        std::env::set_var(API_KEY_VAR, "secret");
        let opts = FetchOptions::from_env().unwrap();
        assert_eq!(opts.api_key, "secret");
        std::env::remove_var(API_KEY_VAR);
    }
}
