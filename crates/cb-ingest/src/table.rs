//! Raw spreadsheet structures.
//!
//! A [`Workbook`] is a list of [`Sheet`] grids exactly as read from disk. A
//! [`Table`] is a sheet whose first row has been promoted to column names.
//! These are the only dynamically typed structures in the pipeline; typed
//! rows are built from normalized tables in [`crate::contracts`] and
//! [`crate::categories`].

use std::borrow::Cow;
use std::path::PathBuf;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY: Cell = Cell::Empty;

impl Cell {
    /// Convert a `calamine` cell. Error cells read as empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_data(data: &calamine::Data) -> Self {
        match data {
            calamine::Data::Empty | calamine::Data::Error(_) => Self::Empty,
            calamine::Data::String(text) => Self::Text(text.clone()),
            calamine::Data::Float(value) => Self::Number(*value),
            calamine::Data::Int(value) => Self::Number(*value as f64),
            calamine::Data::Bool(value) => Self::Bool(*value),
            other => Self::Text(other.to_string()),
        }
    }

    /// Convert a CSV field. CSV carries no types, so every non-empty field is text.
    #[must_use]
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Self::Empty
        } else {
            Self::Text(field.to_string())
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text view of the cell. Whole numbers print without a fractional part,
    /// so a numeric contract code `12345` reads back as `"12345"`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(value) => Some(Cow::Owned(format_number(*value))),
            Self::Bool(value) => Some(Cow::Owned(value.to_string())),
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Truthiness for designation flag columns: `x`, `yes`, `true`, `1`, or
    /// any non-zero number.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0,
            Self::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "x" | "y" | "yes" | "true" | "1"
            ),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// One worksheet as a grid of cells. Row 0 is the sheet's first row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    #[must_use]
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Cell at `(row, col)`; out-of-range positions read as empty.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Widest row, in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Where a workbook came from. CSV files have a single sheet named after the
/// file stem, so the sheet name carries no meaning there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Spreadsheet,
    Csv,
}

/// Every sheet of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub path: PathBuf,
    pub kind: SourceKind,
    pub sheets: Vec<Sheet>,
}

/// A sheet with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub sheet: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Promote the first row of `sheet` to column names.
    ///
    /// Returns `None` for a sheet with no rows. Header cells that are empty
    /// become `column_{index}`.
    #[must_use]
    pub fn from_sheet(sheet: &Sheet) -> Option<Self> {
        let (header, body) = sheet.rows.split_first()?;
        let columns = header
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                cell.as_text()
                    .map_or_else(|| format!("column_{index}"), Cow::into_owned)
            })
            .collect();
        Some(Self {
            sheet: sheet.name.clone(),
            columns,
            rows: body.to_vec(),
        })
    }

    /// Index of the first column named `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell of `row` at column `index`; short rows read as empty.
    #[must_use]
    pub fn cell<'a>(row: &'a [Cell], index: usize) -> &'a Cell {
        row.get(index).unwrap_or(&EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_read_back_as_integers() {
        assert_eq!(Cell::Number(12345.0).as_text().as_deref(), Some("12345"));
        assert_eq!(Cell::Number(0.15).as_text().as_deref(), Some("0.15"));
        assert_eq!(Cell::Empty.as_text(), None);
    }

    #[test]
    fn truthy_cells() {
        assert!(Cell::Text(" X ".into()).is_truthy());
        assert!(Cell::Number(1.0).is_truthy());
        assert!(Cell::Bool(true).is_truthy());
        assert!(!Cell::Text("no".into()).is_truthy());
        assert!(!Cell::Number(0.0).is_truthy());
        assert!(!Cell::Empty.is_truthy());
    }

    #[test]
    fn table_from_sheet_names_blank_headers() {
        let sheet = Sheet::new(
            "ITE",
            vec![
                vec![Cell::Text("Company".into()), Cell::Empty],
                vec![Cell::Text("Acme".into()), Cell::Number(0.2)],
            ],
        );
        let table = Table::from_sheet(&sheet).expect("sheet has a header");
        assert_eq!(table.columns, vec!["Company", "column_1"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(Table::cell(&table.rows[0], 5), &Cell::Empty);
        assert!(Table::from_sheet(&Sheet::new("empty", Vec::new())).is_none());
    }

    #[test]
    fn sheet_cell_out_of_range_is_empty() {
        let sheet = Sheet::new("s", vec![vec![Cell::Text("a".into())]]);
        assert_eq!(sheet.cell(0, 0), &Cell::Text("a".into()));
        assert_eq!(sheet.cell(3, 3), &Cell::Empty);
        assert_eq!(sheet.width(), 1);
    }
}
