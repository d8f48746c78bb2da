//! Feed mapping model and writer.
//!
//! The mapping file associates each archive filename with its ordinal
//! prefix, download URL and GTFS-RT companion URLs. Keys are derived
//! filenames, so the `BTreeMap` ordering equals ascending-prefix order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BatchError;

/// filename → entry, ordered by filename (== ordered by prefix).
pub type Mapping = BTreeMap<String, MappingEntry>;

/// Per-feed record written to the mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Zero-based rank of the feed in ascending filename order.
    pub prefix: usize,
    /// Source URL the archive was fetched from.
    pub download_url: String,
    /// GTFS-RT companion URLs in catalog order; `null` when none matched.
    pub gtfs_rt: Option<Vec<String>>,
}

/// Serialize the mapping as pretty JSON (2-space indent, non-ASCII kept
/// literal) and replace `path` unconditionally.
pub fn write(mapping: &Mapping, path: &Path) -> Result<(), BatchError> {
    let mapping_err = |e: serde_json::Error| BatchError::MappingWrite {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(|e| mapping_err(serde_json::Error::io(e)))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, mapping).map_err(mapping_err)?;
    writer
        .flush()
        .map_err(|e| mapping_err(serde_json::Error::io(e)))?;
    tracing::debug!("wrote {} mapping entries to {}", mapping.len(), path.display());
    Ok(())
}
