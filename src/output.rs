// src/output.rs
// =============================================================================
// Writes the sorted suggestion list to disk as a pretty-printed JSON array.
//
// The file is consumed as-is by the search UI, so the format is fixed:
//   [
//     "first",
//     "second"
//   ]
//
// Writes go to a sibling ".tmp" file first and are then renamed into place.
// A crash mid-write never leaves a half-written JSON file behind.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn write_suggestions(path: &Path, suggestions: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(suggestions)?;

    let tmp = temp_path(path);
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("moving {} into place at {}", tmp.display(), path.display()))?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "suggestions.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
