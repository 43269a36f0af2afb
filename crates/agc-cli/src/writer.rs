//! Artifact persistence.

use std::fs;
use std::path::Path;

use agc_core::{Error, Result};

/// Atomically writes `bytes` to `path` via a `.tmp` sibling.
///
/// A failure at any point leaves the final path untouched, so a previous
/// valid artifact is never replaced by a truncated one.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(|source| Error::OutputWrite {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
