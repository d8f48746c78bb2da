//! NAP catalog structures and loader.
//!
//! The catalog is a JSON object with a `sources` array. Entries carry more
//! keys than we care about; only `type`, `name`, `spec` and `url` matter and
//! every field is optional on the wire.

use serde::Deserialize;
use std::path::Path;

use crate::error::BatchError;

/// Source kind as declared in the catalog. Only `http` (a static feed
/// archive to download) and `url` (a referenced feed, e.g. GTFS-RT) are
/// meaningful; everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    Url,
    #[default]
    #[serde(other)]
    Other,
}

/// One catalog source record. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Source {
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spec: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parsed catalog. A missing `sources` key reads as an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Load and parse the catalog file. Missing file and malformed JSON are
/// distinct fatal errors; neither produces any output.
pub fn load(path: &Path) -> Result<Catalog, BatchError> {
    let bytes = std::fs::read(path).map_err(|e| BatchError::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let catalog: Catalog =
        serde_json::from_slice(&bytes).map_err(|e| BatchError::CatalogParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::debug!(
        "loaded {} sources from {}",
        catalog.sources.len(),
        path.display()
    );
    Ok(catalog)
}
