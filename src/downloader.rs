//! Single-stream HTTP GET fetch for feed archives.
//!
//! Streams the response body through a fixed-size buffer into a `.part`
//! temp file and renames it into place once the transfer and status check
//! succeed, so an interrupted download never masquerades as a finished one.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::FetchOptions;
use crate::error::BatchError;

/// Request header carrying the NAP API key.
pub const API_KEY_HEADER: &str = "ApiKey";

/// Temp suffix used while a transfer is in flight.
const PART_SUFFIX: &str = ".part";

/// Downloads `url` to `dest`, overwriting any stale temp file. The caller
/// decides whether to fetch at all (skip-if-exists lives in the pipeline).
///
/// Prints the operator-facing `Downloading ...` line; diagnostics go to
/// tracing. Any failure removes the temp file and aborts the run.
pub fn fetch_feed(url: &str, dest: &Path, opts: &FetchOptions) -> Result<(), BatchError> {
    let display_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string());
    println!("Downloading {} from {}", display_name, url);

    let request_err = |e: curl::Error| BatchError::Request {
        url: url.to_string(),
        source: e,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(request_err)?;
    easy.follow_location(true).map_err(request_err)?;
    easy.max_redirections(10).map_err(request_err)?;
    easy.connect_timeout(opts.timeout).map_err(request_err)?;
    easy.timeout(opts.timeout).map_err(request_err)?;
    easy.buffer_size(opts.buffer_size).map_err(request_err)?;

    let mut list = curl::easy::List::new();
    list.append(&format!("{}: {}", API_KEY_HEADER, opts.api_key))
        .map_err(request_err)?;
    easy.http_headers(list).map_err(request_err)?;

    let part = part_path(dest);
    let file = File::create(&part).map_err(|e| BatchError::Write {
        path: part.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::with_capacity(opts.buffer_size, file);
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match writer.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(request_err)?;
        transfer.perform()
    };

    // A write failure also surfaces as a curl abort; report the disk error.
    if let Some(e) = write_error {
        let _ = std::fs::remove_file(&part);
        return Err(BatchError::Write {
            path: part,
            source: e,
        });
    }
    if let Err(e) = performed {
        let _ = std::fs::remove_file(&part);
        return Err(request_err(e));
    }

    let status = easy.response_code().map_err(request_err)?;
    if !(200..300).contains(&status) {
        let _ = std::fs::remove_file(&part);
        return Err(BatchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let file = writer.into_inner().map_err(|e| BatchError::Write {
        path: part.clone(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|e| BatchError::Write {
        path: part.clone(),
        source: e,
    })?;
    drop(file);
    std::fs::rename(&part, dest).map_err(|e| BatchError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(url, status, dest = %dest.display(), "feed downloaded");
    Ok(())
}

/// Temp path for an in-flight transfer: appends `.part` to the final path.
fn part_path(dest: &Path) -> PathBuf {
    let mut p = dest.as_os_str().to_owned();
    p.push(PART_SUFFIX);
    PathBuf::from(p)
}
