//! Feed selection over the parsed catalog.
//!
//! Pure transformations: candidate filtering and ordering, and the GTFS-RT
//! URL lookup. The download ordinal (`prefix`) is the candidate's position
//! in the list returned by [`candidates`], so the sort here is the ordering
//! contract for the whole mapping.

use crate::catalog::{Source, SourceKind};
use crate::error::BatchError;

/// `spec` value marking a url-typed source as a real-time companion feed.
pub const GTFS_RT_SPEC: &str = "gtfs-rt";

/// A downloadable static feed selected from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Catalog source name (exact, case-sensitive).
    pub name: &'a str,
    /// Archive download URL.
    pub url: &'a str,
    /// Derived local filename, also the mapping key.
    pub filename: String,
}

/// Local filename for a feed: `es_<name>.zip`.
pub fn feed_filename(name: &str) -> String {
    format!("es_{}.zip", name)
}

/// Selects http-typed sources with a non-empty URL, sorted ascending by
/// derived filename (plain byte comparison, stable for ties).
///
/// The sort key is the filename, not the raw name: the two orderings differ
/// when one name is a prefix of another and the joining byte sorts below
/// `.` (e.g. `metro-bus` files before `metro`).
///
/// An http source carrying a URL but no name is a fatal catalog error; a
/// filename cannot be derived for it.
pub fn candidates(sources: &[Source]) -> Result<Vec<Candidate<'_>>, BatchError> {
    let mut selected = Vec::new();
    for source in sources {
        if source.kind != SourceKind::Http {
            continue;
        }
        let Some(url) = source.url.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let name = source
            .name
            .as_deref()
            .ok_or_else(|| BatchError::CatalogInvalid {
                reason: format!("http source with url {} has no name", url),
            })?;
        selected.push(Candidate {
            name,
            url,
            filename: feed_filename(name),
        });
    }
    // sort_by is stable, preserving catalog order for equal filenames.
    selected.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(selected)
}

/// URLs of url-typed sources with `spec == "gtfs-rt"` and an exactly
/// matching name, in catalog order.
pub fn realtime_urls(sources: &[Source], name: &str) -> Vec<String> {
    sources
        .iter()
        .filter(|s| {
            s.kind == SourceKind::Url
                && s.spec.as_deref() == Some(GTFS_RT_SPEC)
                && s.name.as_deref() == Some(name)
        })
        .filter_map(|s| s.url.clone())
        .collect()
}
