//! Ingest error types.
//!
//! Every variant names the offending file so startup failures point straight
//! at the input that needs fixing.

use std::path::PathBuf;

/// Errors raised while loading or validating an input spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The input path does not exist or is not a file.
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file extension is not a spreadsheet or CSV.
    #[error(
        "Unsupported input format '{extension}' for {} (expected xlsx, xlsm, xlsb, xls, ods or csv)",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// `calamine` could not open or decode the workbook.
    #[error("Failed to read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The CSV reader failed.
    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A sheet lacks a column the pipeline requires.
    #[error("{}: sheet '{sheet}' is missing required column '{column}'", path.display())]
    MissingColumn {
        path: PathBuf,
        sheet: String,
        column: String,
    },

    /// The file is readable but its layout is not one we understand.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// Nothing usable was left after skipping sheets and boilerplate rows.
    #[error("{} contains no {what} rows", path.display())]
    EmptyInput { path: PathBuf, what: &'static str },
}
