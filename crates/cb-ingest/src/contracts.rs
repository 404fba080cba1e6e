//! Contracts input: one sheet per procurement category, one row per vendor contact.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cb_config::IngestConfig;
use cb_core::{ProcurementCategory, VendorContract};
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::normalize::{is_metadata_vendor, join_key, normalize_table};
use crate::reader::read_workbook;
use crate::schema::Field;
use crate::table::{Cell, SourceKind, Table, Workbook};

/// Typed contract rows plus what was left out while building them.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractTable {
    pub source: PathBuf,
    pub rows: Vec<VendorContract>,
    pub skipped_sheets: Vec<String>,
    /// Boilerplate rows and rows without a vendor or category.
    pub dropped_rows: usize,
}

/// Read, normalize and type the contracts file at `path`.
///
/// # Errors
///
/// Any [`IngestError`] from reading the file, [`IngestError::MissingColumn`]
/// when a sheet lacks the vendor column or both numeric columns, and
/// [`IngestError::EmptyInput`] when no contract rows survive.
pub fn load_contracts(path: &Path, config: &IngestConfig) -> Result<ContractTable, IngestError> {
    let workbook = read_workbook(path)?;
    contracts_from_workbook(&workbook, config)
}

/// Build typed contract rows from an already-read workbook.
///
/// # Errors
///
/// See [`load_contracts`].
pub fn contracts_from_workbook(
    workbook: &Workbook,
    config: &IngestConfig,
) -> Result<ContractTable, IngestError> {
    let mut table = ContractTable {
        source: workbook.path.clone(),
        rows: Vec::new(),
        skipped_sheets: Vec::new(),
        dropped_rows: 0,
    };
    let mut unknown = BTreeSet::new();

    for sheet in &workbook.sheets {
        if config.skips(&sheet.name) {
            debug!(sheet = %sheet.name, "skipping sheet");
            table.skipped_sheets.push(sheet.name.clone());
            continue;
        }
        let Some(raw) = Table::from_sheet(sheet) else {
            debug!(sheet = %sheet.name, "empty sheet");
            continue;
        };

        let normalized = normalize_table(&raw);
        let before = table.rows.len();
        let dropped = read_sheet(workbook, &normalized, &mut table.rows)?;
        table.dropped_rows += dropped;

        for row in &table.rows[before..] {
            if !row.category.is_known() {
                unknown.insert(row.category.code().to_string());
            }
        }
        debug!(
            sheet = %sheet.name,
            rows = table.rows.len() - before,
            dropped,
            "loaded contract sheet"
        );
    }

    for code in &unknown {
        warn!(category = %code, "unknown procurement category");
    }

    if table.rows.is_empty() {
        return Err(IngestError::EmptyInput {
            path: workbook.path.clone(),
            what: "contract",
        });
    }
    Ok(table)
}

struct Columns {
    vendor: usize,
    category: Option<usize>,
    amount: Option<usize>,
    sdo_pct: Option<usize>,
    contract_code: Option<usize>,
    fiscal_year: Option<usize>,
    contact_name: Option<usize>,
    role: Option<usize>,
    email: Option<usize>,
    phone: Option<usize>,
}

impl Columns {
    fn locate(workbook: &Workbook, table: &Table) -> Result<Self, IngestError> {
        let missing = |column: &str| IngestError::MissingColumn {
            path: workbook.path.clone(),
            sheet: table.sheet.clone(),
            column: column.to_string(),
        };

        let vendor = Field::Vendor
            .locate(table)
            .ok_or_else(|| missing(Field::Vendor.name()))?;
        let amount = Field::Amount.locate(table);
        let sdo_pct = Field::SdoPct.locate(table);
        if amount.is_none() && sdo_pct.is_none() {
            return Err(missing("amount or sdo_pct"));
        }
        let category = Field::Category.locate(table);
        if category.is_none() && workbook.kind == SourceKind::Csv {
            return Err(missing(Field::Category.name()));
        }

        Ok(Self {
            vendor,
            category,
            amount,
            sdo_pct,
            contract_code: Field::ContractCode.locate(table),
            fiscal_year: Field::FiscalYear.locate(table),
            contact_name: Field::ContactName.locate(table),
            role: Field::Role.locate(table),
            email: Field::Email.locate(table),
            phone: Field::Phone.locate(table),
        })
    }
}

/// Append typed rows for one normalized sheet; returns the number dropped.
fn read_sheet(
    workbook: &Workbook,
    table: &Table,
    out: &mut Vec<VendorContract>,
) -> Result<usize, IngestError> {
    let columns = Columns::locate(workbook, table)?;
    let sheet_category = match workbook.kind {
        SourceKind::Spreadsheet => Some(table.sheet.trim()).filter(|name| !name.is_empty()),
        SourceKind::Csv => None,
    };
    let mut dropped = 0;

    for row in &table.rows {
        let Some(vendor) = text(row, Some(columns.vendor)) else {
            dropped += 1;
            continue;
        };
        if is_metadata_vendor(&vendor) {
            dropped += 1;
            continue;
        }
        let Some(category) = text(row, columns.category)
            .as_deref()
            .or(sheet_category)
            .map(ProcurementCategory::parse)
        else {
            dropped += 1;
            continue;
        };

        let vendor_key = join_key(&vendor);
        let mut contract = VendorContract::new(vendor, vendor_key, category);
        contract.contract_code = text(row, columns.contract_code);
        contract.amount = number(row, columns.amount);
        contract.sdo_pct = number(row, columns.sdo_pct);
        contract.fiscal_year = number(row, columns.fiscal_year).map(year);
        contract.contact_name = text(row, columns.contact_name);
        contract.role = text(row, columns.role);
        contract.email = text(row, columns.email);
        contract.phone = text(row, columns.phone);
        out.push(contract);
    }

    Ok(dropped)
}

fn text(row: &[Cell], column: Option<usize>) -> Option<String> {
    column
        .and_then(|index| Table::cell(row, index).as_text())
        .map(std::borrow::Cow::into_owned)
}

fn number(row: &[Cell], column: Option<usize>) -> Option<f64> {
    column.and_then(|index| Table::cell(row, index).as_number())
}

#[allow(clippy::cast_possible_truncation)]
fn year(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Sheet;
    use pretty_assertions::assert_eq;

    fn text_cell(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn workbook(kind: SourceKind, sheets: Vec<Sheet>) -> Workbook {
        Workbook {
            path: PathBuf::from("contracts.xlsx"),
            kind,
            sheets,
        }
    }

    fn ite_sheet() -> Sheet {
        Sheet::new(
            "ITE",
            vec![
                vec![
                    text_cell("Contract_Code"),
                    text_cell("Name"),
                    text_cell("Company"),
                    text_cell("SDO_Pct"),
                ],
                vec![
                    text_cell("ITE47"),
                    text_cell("Jane Doe"),
                    text_cell("Acme\nCorp"),
                    Cell::Number(0.25),
                ],
                vec![
                    Cell::Empty,
                    Cell::Empty,
                    text_cell("Master Contract Record"),
                    Cell::Empty,
                ],
                vec![text_cell("ITE47"), Cell::Empty, Cell::Empty, Cell::Number(0.1)],
                vec![
                    text_cell("ITE48"),
                    Cell::Empty,
                    text_cell("Globex"),
                    text_cell("N/A"),
                ],
            ],
        )
    }

    #[test]
    fn spreadsheet_sheets_supply_the_category() {
        let book = workbook(
            SourceKind::Spreadsheet,
            vec![ite_sheet(), Sheet::new("Abbreviations ", vec![vec![text_cell("x")]])],
        );
        let table = contracts_from_workbook(&book, &IngestConfig::default()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.dropped_rows, 2);
        assert_eq!(table.skipped_sheets, vec!["Abbreviations ".to_string()]);

        let acme = &table.rows[0];
        assert_eq!(acme.vendor, "Acme Corp");
        assert_eq!(acme.vendor_key, "acme corp");
        assert_eq!(acme.category, ProcurementCategory::Ite);
        assert_eq!(acme.contract_code.as_deref(), Some("ITE47"));
        assert_eq!(acme.contact_name.as_deref(), Some("Jane Doe"));
        assert_eq!(acme.sdo_pct, Some(0.25));

        let globex = &table.rows[1];
        assert_eq!(globex.sdo_pct, None);
    }

    #[test]
    fn missing_vendor_column_names_sheet_and_column() {
        let sheet = Sheet::new(
            "ITS",
            vec![vec![text_cell("Amount")], vec![Cell::Number(1.0)]],
        );
        let err = contracts_from_workbook(
            &workbook(SourceKind::Spreadsheet, vec![sheet]),
            &IngestConfig::default(),
        )
        .unwrap_err();

        match err {
            IngestError::MissingColumn { sheet, column, .. } => {
                assert_eq!(sheet, "ITS");
                assert_eq!(column, "vendor");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_requires_a_category_column() {
        let sheet = Sheet::new(
            "contracts",
            vec![
                vec![text_cell("Vendor"), text_cell("Amount")],
                vec![text_cell("Acme"), text_cell("100")],
            ],
        );
        let err = contracts_from_workbook(
            &workbook(SourceKind::Csv, vec![sheet]),
            &IngestConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { ref column, .. } if column == "category"
        ));
    }

    #[test]
    fn only_skipped_sheets_is_empty_input() {
        let book = workbook(
            SourceKind::Spreadsheet,
            vec![Sheet::new("Abbreviations", vec![vec![text_cell("x")]])],
        );
        let err = contracts_from_workbook(&book, &IngestConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput { what: "contract", .. }));
    }
}
