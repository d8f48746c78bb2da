//! The batch pipeline: load → select → (download)* → write mapping.
//!
//! Strictly sequential and fail-fast: the first error aborts the run, so the
//! mapping file is only ever written after every candidate was handled.

use crate::catalog;
use crate::config::BatchConfig;
use crate::downloader;
use crate::error::BatchError;
use crate::mapping::{self, Mapping, MappingEntry};
use crate::select;

/// Counts for the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidate feeds in the catalog (== mapping entries written).
    pub total: usize,
    /// Archives fetched this run.
    pub downloaded: usize,
    /// Archives already present and left untouched.
    pub skipped: usize,
}

/// Run one full batch. Returns the summary on success; any error is fatal
/// and the mapping file is not written.
pub fn run(cfg: &BatchConfig) -> Result<BatchSummary, BatchError> {
    println!("Loading local {} ...", cfg.catalog_path.display());
    let catalog = catalog::load(&cfg.catalog_path)?;
    let candidates = select::candidates(&catalog.sources)?;

    let mut mapping = Mapping::new();
    let mut downloaded = 0;
    let mut skipped = 0;

    for (prefix, feed) in candidates.iter().enumerate() {
        let rt_urls = select::realtime_urls(&catalog.sources, feed.name);
        mapping.insert(
            feed.filename.clone(),
            MappingEntry {
                prefix,
                download_url: feed.url.to_string(),
                gtfs_rt: if rt_urls.is_empty() { None } else { Some(rt_urls) },
            },
        );

        let dest = cfg.download_dir.join(&feed.filename);
        if dest.exists() {
            // No integrity check: presence alone counts as downloaded.
            println!("Skipping {}, already exists", feed.filename);
            skipped += 1;
        } else {
            downloader::fetch_feed(feed.url, &dest, &cfg.fetch)?;
            downloaded += 1;
        }
    }

    mapping::write(&mapping, &cfg.output_path)?;

    let summary = BatchSummary {
        total: candidates.len(),
        downloaded,
        skipped,
    };
    tracing::info!(
        total = summary.total,
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        mapping = %cfg.output_path.display(),
        "batch complete"
    );
    Ok(summary)
}
