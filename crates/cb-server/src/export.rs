//! Static HTML export.

use std::fs;
use std::path::{Path, PathBuf};

use cb_charts::Dashboard;
use tracing::info;

use crate::error::ServerError;
use crate::page;

/// Write the self-contained dashboard page to `path`, creating parent
/// directories as needed. Returns the path written.
///
/// # Errors
///
/// Returns [`ServerError::Encode`] if a payload fails to serialize, or
/// [`ServerError::Write`] if the file cannot be written.
pub fn export_static(dashboard: &Dashboard, path: &Path) -> Result<PathBuf, ServerError> {
    let html = page::render_static(dashboard)?;
    let write_error = |source| ServerError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, &html).map_err(write_error)?;

    info!(path = %path.display(), bytes = html.len(), "exported static dashboard");
    Ok(path.to_path_buf())
}
