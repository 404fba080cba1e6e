//! File readers: spreadsheet workbooks through `calamine`, CSV through `csv`.

use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use tracing::debug;

use crate::error::IngestError;
use crate::table::{Cell, Sheet, SourceKind, Workbook};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read every sheet of `path`.
///
/// The format is chosen from the file extension. Spreadsheet sheets keep
/// their absolute cell positions: a sheet whose used range starts at `B3`
/// gets two padding rows and one padding column, so row and column indexes
/// match what a user sees in the workbook.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when `path` is not a file,
/// [`IngestError::UnsupportedFormat`] for unknown extensions, and
/// [`IngestError::Workbook`] / [`IngestError::Csv`] when decoding fails.
pub fn read_workbook(path: &Path) -> Result<Workbook, IngestError> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "csv" {
        read_csv(path)
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        read_spreadsheet(path)
    } else {
        Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        })
    }
}

fn read_spreadsheet(path: &Path) -> Result<Workbook, IngestError> {
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(workbook_error)?;
        let (row_offset, col_offset) = range
            .start()
            .map_or((0, 0), |(row, col)| (row as usize, col as usize));

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
        for data_row in range.rows() {
            let mut cells = vec![Cell::Empty; col_offset];
            cells.extend(data_row.iter().map(Cell::from_data));
            rows.push(cells);
        }

        debug!(sheet = %name, rows = rows.len(), "read sheet");
        sheets.push(Sheet::new(name, rows));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        kind: SourceKind::Spreadsheet,
        sheets,
    })
}

fn read_csv(path: &Path) -> Result<Workbook, IngestError> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(Cell::from_field).collect());
    }

    let name = sheet_name_for(path);
    debug!(sheet = %name, rows = rows.len(), "read csv");

    Ok(Workbook {
        path: path.to_path_buf(),
        kind: SourceKind::Csv,
        sheets: vec![Sheet::new(name, rows)],
    })
}

fn sheet_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| "Sheet1".to_string(), str::to_string)
}
