// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{FixtureError, Result};

/// Write rendered output to the path implied by `export.out_path()`,
/// creating parent directories. Returns the final path written to.
pub fn write_export(export: &ExportOptions, contents: &str) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    logf!("Export: wrote {} byte(s) → {}", contents.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(FixtureError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
