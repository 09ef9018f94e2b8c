//! Atomic configuration persistence.
//!
//! Writes go to a temp file in the target directory, which is synced and
//! then renamed into place. A reader never observes a partially written
//! config: either the old file survives intact or the new one has fully
//! replaced it.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::Config;

/// Write the config to `path` via temp-file-then-rename.
///
/// If the rename collides with an existing target (Windows rename
/// semantics), the target is removed and the rename retried once; a second
/// failure cleans up the temp file and reports the original error.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| anyhow!("config path {} has no parent directory", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    // The temp file must live in the target directory: rename is only
    // atomic within a filesystem.
    let mut tmp = tempfile::Builder::new()
        .prefix("config.json.tmp.")
        .tempfile_in(dir)
        .context("failed to create temp file")?;

    serde_json::to_writer_pretty(&mut tmp, config).context("failed to encode config to JSON")?;
    tmp.write_all(b"\n").context("failed to write temp file")?;
    tmp.as_file().sync_all().context("failed to sync temp file")?;

    persist_with_replace(tmp, path)
}

fn persist_with_replace(tmp: NamedTempFile, path: &Path) -> Result<()> {
    let failure = match tmp.persist(path) {
        Ok(_) => return Ok(()),
        Err(failure) => failure,
    };

    // First rename failed; the temp file comes back in the error. Remove an
    // existing target and retry once.
    let primary = failure.error;
    let tmp = failure.file;

    if fs::remove_file(path).is_ok() {
        match tmp.persist(path) {
            Ok(_) => return Ok(()),
            Err(retry_failure) => {
                let _ = retry_failure.file.close();
                return Err(retry_failure.error).context("failed to rename temp config file");
            }
        }
    }

    // Couldn't remove the existing target; drop the temp file and report
    // the original rename error.
    let _ = tmp.close();
    Err(primary).context("failed to rename temp config file")
}
