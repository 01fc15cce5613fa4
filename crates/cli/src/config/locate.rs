use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::file::VersionMapFile;

/// File names checked in each directory, in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".instantiator.json", "instantiator.json"];

/// Find a config file in `start` or its parent directories
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current_dir = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current_dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Move to parent directory
        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Pick the version map file: the explicit path, or the nearest one above the cwd
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(anyhow::anyhow!("Version map not found: {}", path.display()));
        }
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    debug!("Searching for a version map from {}", cwd.display());
    find_config_file(&cwd)
        .with_context(|| format!("No version map file found in {} or its parents", cwd.display()))
}

/// Load the version map file at `path`
pub fn open_version_map(path: &Path) -> Result<VersionMapFile> {
    VersionMapFile::load(path).with_context(|| format!("Failed to load {}", path.display()))
}
