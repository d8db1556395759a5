//! Hands the encoded composition to the filesystem

use std::path::{Path, PathBuf};

use crate::compose::compositor::CompositionResult;
use crate::io::configuration::OUTPUT_FILE_NAME;
use crate::io::error::{Result, WithPath};

/// Resolve where the composition is written
///
/// A directory target receives [`OUTPUT_FILE_NAME`]; anything else is used as is.
pub fn resolve_output_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(OUTPUT_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}

/// Write the encoded composition to `path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn export_png(result: &CompositionResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    std::fs::write(path, result.bytes()).with_path(path, "write composition")
}
