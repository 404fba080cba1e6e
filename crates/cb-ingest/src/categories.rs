//! Categorized-companies input.
//!
//! Two layouts are understood. A *table* sheet has a header row with a vendor
//! column, a sub-category column, and either a designation `type` column or
//! one flag column per designation. A *matrix* sheet is one industry: from
//! the third row on, columns B, C and D list the companies designated
//! National & Local, Local, and SGC Target.
//!
//! Rows are collapsed per (sub-category, vendor key), merging designation
//! flags, and kept in first-seen order.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cb_config::{CategoryLayout, IngestConfig};
use cb_core::{Designation, DesignationFlags, VendorCategory};
use tracing::debug;

use crate::error::IngestError;
use crate::normalize::{clean_text, join_key, normalize_table, snake_case};
use crate::reader::read_workbook;
use crate::schema::Field;
use crate::table::{Cell, Sheet, Table, Workbook};

/// First data row of a matrix sheet (rows 0 and 1 hold titles and headers).
const MATRIX_FIRST_ROW: usize = 2;

/// Matrix columns, in [`Designation::ALL`] order.
const MATRIX_COLUMNS: [usize; 3] = [1, 2, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub source: PathBuf,
    pub rows: Vec<VendorCategory>,
    pub skipped_sheets: Vec<String>,
}

impl CategoryTable {
    /// Distinct sub-categories in first-seen order.
    #[must_use]
    pub fn sub_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.sub_category.as_str()) {
                seen.push(&row.sub_category);
            }
        }
        seen
    }
}

/// Read and type the categorized-companies file at `path`.
///
/// # Errors
///
/// Any [`IngestError`] from reading the file, [`IngestError::MissingColumn`]
/// for a table-layout sheet without the vendor, sub-category or designation
/// columns, and [`IngestError::EmptyInput`] when no company rows are found.
pub fn load_categories(path: &Path, config: &IngestConfig) -> Result<CategoryTable, IngestError> {
    let workbook = read_workbook(path)?;
    categories_from_workbook(&workbook, config)
}

/// Build typed category rows from an already-read workbook.
///
/// # Errors
///
/// See [`load_categories`].
pub fn categories_from_workbook(
    workbook: &Workbook,
    config: &IngestConfig,
) -> Result<CategoryTable, IngestError> {
    let mut collector = Collector::default();
    let mut skipped_sheets = Vec::new();

    for sheet in &workbook.sheets {
        if config.skips(&sheet.name) {
            debug!(sheet = %sheet.name, "skipping sheet");
            skipped_sheets.push(sheet.name.clone());
            continue;
        }

        let layout = match config.category_layout {
            CategoryLayout::Auto => detect_layout(sheet),
            explicit => explicit,
        };
        let before = collector.rows.len();
        match layout {
            CategoryLayout::Matrix => read_matrix(sheet, &mut collector),
            _ => read_table(workbook, sheet, &mut collector)?,
        }
        debug!(
            sheet = %sheet.name,
            ?layout,
            companies = collector.rows.len() - before,
            "loaded category sheet"
        );
    }

    if collector.rows.is_empty() {
        return Err(IngestError::EmptyInput {
            path: workbook.path.clone(),
            what: "category",
        });
    }

    Ok(CategoryTable {
        source: workbook.path.clone(),
        rows: collector.rows,
        skipped_sheets,
    })
}

/// Table when the first row names a vendor column, matrix otherwise.
fn detect_layout(sheet: &Sheet) -> CategoryLayout {
    let has_vendor_header = sheet.rows.first().is_some_and(|header| {
        header.iter().any(|cell| {
            cell.as_text()
                .is_some_and(|text| Field::resolve(&snake_case(&text)) == Some(Field::Vendor))
        })
    });
    if has_vendor_header {
        CategoryLayout::Table
    } else {
        CategoryLayout::Matrix
    }
}

#[derive(Default)]
struct Collector {
    rows: Vec<VendorCategory>,
    index: HashMap<(String, String), usize>,
}

impl Collector {
    fn add(&mut self, vendor: String, sub_category: &str, designations: DesignationFlags) {
        let vendor_key = join_key(&vendor);
        let key = (sub_category.to_string(), vendor_key.clone());
        if let Some(&position) = self.index.get(&key) {
            let existing = &mut self.rows[position].designations;
            for designation in designations.iter() {
                existing.insert(designation);
            }
            return;
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(VendorCategory::new(
            vendor,
            vendor_key,
            sub_category,
            designations,
        ));
    }
}

fn read_matrix(sheet: &Sheet, collector: &mut Collector) {
    let Some(sub_category) = clean_text(&sheet.name) else {
        return;
    };

    for row in MATRIX_FIRST_ROW..sheet.rows.len() {
        for (designation, column) in Designation::ALL.into_iter().zip(MATRIX_COLUMNS) {
            let Some(vendor) = sheet
                .cell(row, column)
                .as_text()
                .and_then(|text| clean_text(&text))
            else {
                continue;
            };
            collector.add(
                vendor,
                &sub_category,
                DesignationFlags::default().with(designation),
            );
        }
    }
}

fn read_table(
    workbook: &Workbook,
    sheet: &Sheet,
    collector: &mut Collector,
) -> Result<(), IngestError> {
    let Some(raw) = Table::from_sheet(sheet) else {
        return Ok(());
    };
    let table = normalize_table(&raw);
    let missing = |column: &str| IngestError::MissingColumn {
        path: workbook.path.clone(),
        sheet: table.sheet.clone(),
        column: column.to_string(),
    };

    let vendor_col = Field::Vendor
        .locate(&table)
        .ok_or_else(|| missing(Field::Vendor.name()))?;
    let sub_category_col = Field::SubCategory
        .locate(&table)
        .ok_or_else(|| missing(Field::SubCategory.name()))?;
    let type_col = Field::Type.locate(&table);
    let flag_cols: Vec<(Designation, usize)> = table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(index, column)| Designation::parse(column).map(|d| (d, index)))
        .collect();
    if type_col.is_none() && flag_cols.is_empty() {
        return Err(missing(Field::Type.name()));
    }

    for row in &table.rows {
        let Some(vendor) = text(row, vendor_col) else {
            continue;
        };
        let Some(sub_category) = text(row, sub_category_col) else {
            continue;
        };

        let mut designations = DesignationFlags::default();
        if let Some(designation) = type_col
            .and_then(|index| text(row, index))
            .and_then(|value| Designation::parse(&value))
        {
            designations.insert(designation);
        }
        for &(designation, index) in &flag_cols {
            if Table::cell(row, index).is_truthy() {
                designations.insert(designation);
            }
        }

        collector.add(vendor, &sub_category, designations);
    }

    Ok(())
}

fn text(row: &[Cell], index: usize) -> Option<String> {
    Table::cell(row, index)
        .as_text()
        .map(std::borrow::Cow::into_owned)
}
