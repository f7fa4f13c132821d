use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use econ_core::report::CsvExport;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Writes the export into `dir` under its own file name, replacing any
/// previous report, and returns the written path.
pub fn write_report(
    dir: &Path,
    export: &CsvExport,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export.file_name);
    let io_error = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = File::create(&path).map_err(io_error)?;
    file.write_all(export.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    debug!(path = %path.display(), bytes = export.contents.len(), "Wrote report");
    Ok(path)
}
