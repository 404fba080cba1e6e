//! Normalization of raw tables.
//!
//! Headers become `snake_case`, text is whitespace-cleaned, and the numeric
//! fields are parsed from currency-formatted strings. Cells that should be
//! numeric but do not parse become empty; the row is kept. Running
//! [`normalize_table`] on its own output returns the same table.

use crate::schema::Field;
use crate::table::{Cell, Table};

/// Substrings marking boilerplate rows in the contracts workbook.
const METADATA_MARKERS: [&str; 9] = [
    "master contract",
    "solicitation enabled",
    "master mbpo",
    "bid and contract",
    "category and vendor",
    "category development",
    "mass gov",
    "osd help desk",
    "n/a",
];

/// Lower-case a header and join its words with underscores.
///
/// Camel-case boundaries split words (`ContractCode` -> `contract_code`,
/// `SDOPct` -> `sdo_pct`); anything that is not a letter or digit is a
/// separator, so `"SDO Commitment %"` becomes `sdo_commitment`.
#[must_use]
pub fn snake_case(header: &str) -> String {
    let chars: Vec<char> = header.chars().collect();
    let mut out = String::with_capacity(header.len() + 4);
    let mut pending_sep = false;

    for (index, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            pending_sep = !out.is_empty();
            continue;
        }

        if ch.is_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)
            {
                pending_sep = !out.is_empty();
            }
        }

        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.extend(ch.to_lowercase());
    }

    out
}

/// Collapse whitespace runs (newlines included) to single spaces and trim.
/// Returns `None` when nothing is left.
#[must_use]
pub fn clean_text(raw: &str) -> Option<String> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Join key for a vendor name: cleaned and lower-cased.
#[must_use]
pub fn join_key(vendor: &str) -> String {
    clean_text(vendor).unwrap_or_default().to_lowercase()
}

/// Parse a currency- or percent-formatted number.
///
/// Accepts `$1,234.50`, `(300)` for negatives, a leading `-`, and a
/// trailing `%` (divided by 100). Anything else, including `N/A` and
/// non-finite values, is `None`.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let mut text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let mut negative = false;
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        negative = true;
        text = inner.trim();
    }
    if let Some(rest) = text.strip_prefix('-') {
        negative = !negative;
        text = rest.trim_start();
    }

    let mut percent = false;
    if let Some(rest) = text.strip_suffix('%') {
        percent = true;
        text = rest.trim_end();
    }

    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',' | ' '))
        .collect();
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let mut value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if percent {
        value /= 100.0;
    }
    Some(if negative { -value } else { value })
}

/// Parse a fiscal year such as `2024`, `FY2024` or `FY 24`.
#[must_use]
pub fn parse_fiscal_year(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let text = text
        .get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("fy"))
        .map_or(text, |_| text[2..].trim_start());

    parse_number(text).and_then(fiscal_year_from)
}

/// Accept whole-number years; two-digit years are read as `20xx`.
#[allow(clippy::cast_possible_truncation)]
fn fiscal_year_from(value: f64) -> Option<f64> {
    if value.fract() != 0.0 || !(0.0..=2100.0).contains(&value) {
        return None;
    }
    match value as i32 {
        year @ 0..=99 => Some(f64::from(2000 + year)),
        year @ 1900..=2100 => Some(f64::from(year)),
        _ => None,
    }
}

/// Whether a vendor cell is workbook boilerplate rather than a company.
#[must_use]
pub fn is_metadata_vendor(vendor: &str) -> bool {
    let lowered = vendor.to_lowercase();
    METADATA_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Normalize one cell of a column that resolved to `field`.
#[must_use]
pub fn normalize_cell(cell: &Cell, field: Option<Field>) -> Cell {
    let numeric = field.filter(|field| field.is_numeric());
    match (cell, numeric) {
        (Cell::Empty, _) => Cell::Empty,
        (Cell::Text(text), None) => clean_text(text).map_or(Cell::Empty, Cell::Text),
        (Cell::Text(text), Some(Field::FiscalYear)) => {
            parse_fiscal_year(text).map_or(Cell::Empty, Cell::Number)
        }
        (Cell::Text(text), Some(_)) => parse_number(text).map_or(Cell::Empty, Cell::Number),
        (Cell::Number(value), Some(Field::FiscalYear)) => {
            fiscal_year_from(*value).map_or(Cell::Empty, Cell::Number)
        }
        (Cell::Number(value), Some(_)) if !value.is_finite() => Cell::Empty,
        (Cell::Bool(_), Some(_)) => Cell::Empty,
        (other, _) => other.clone(),
    }
}

/// Normalize headers and cells of `table`, dropping rows with no content.
#[must_use]
pub fn normalize_table(table: &Table) -> Table {
    let columns: Vec<String> = table.columns.iter().map(|c| snake_case(c)).collect();
    let fields: Vec<Option<Field>> = columns.iter().map(|c| Field::resolve(c)).collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(index, cell)| normalize_cell(cell, fields.get(index).copied().flatten()))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    Table {
        sheet: table.sheet.clone(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("SDO Commitment %", "sdo_commitment")]
    #[case("Contract_Code", "contract_code")]
    #[case("ContractCode", "contract_code")]
    #[case("SDOPct", "sdo_pct")]
    #[case("  Vendor\nName ", "vendor_name")]
    #[case("Fiscal Year 2024", "fiscal_year_2024")]
    #[case("sdo_pct", "sdo_pct")]
    #[case("%", "")]
    fn snake_case_headers(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(snake_case(raw), expected);
        assert_eq!(snake_case(expected), expected);
    }

    #[rstest]
    #[case("$1,234.50", Some(1234.5))]
    #[case("(300)", Some(-300.0))]
    #[case("-42", Some(-42.0))]
    #[case("12%", Some(0.12))]
    #[case(" 0.15 ", Some(0.15))]
    #[case("£ 2,000", Some(2000.0))]
    #[case("N/A", None)]
    #[case("", None)]
    #[case("$", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("--5", None)]
    fn parses_currency_text(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(raw), expected);
    }

    #[rstest]
    #[case("2024", Some(2024.0))]
    #[case("FY2024", Some(2024.0))]
    #[case("fy 24", Some(2024.0))]
    #[case("2024.5", None)]
    #[case("1492", None)]
    #[case("next year", None)]
    fn parses_fiscal_years(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_fiscal_year(raw), expected);
    }

    #[test]
    fn clean_text_collapses_newlines() {
        assert_eq!(clean_text("Acme\n  Corp\t"), Some("Acme Corp".to_string()));
        assert_eq!(clean_text(" \n "), None);
        assert_eq!(join_key("  ACME\nCorp "), "acme corp");
    }

    #[test]
    fn metadata_markers_match_case_insensitively() {
        assert!(is_metadata_vendor("See MASTER CONTRACT record"));
        assert!(is_metadata_vendor("n/a"));
        assert!(!is_metadata_vendor("Acme Corp"));
    }

    #[test]
    fn unparseable_numeric_cell_becomes_empty() {
        let cell = normalize_cell(&Cell::Text("N/A".into()), Some(Field::Amount));
        assert_eq!(cell, Cell::Empty);
        let cell = normalize_cell(&Cell::Text("N/A".into()), Some(Field::Vendor));
        assert_eq!(cell, Cell::Text("N/A".into()));
    }

    #[test]
    fn normalize_table_is_idempotent() {
        let raw = Table {
            sheet: "ITE".into(),
            columns: vec!["Company".into(), "Contract Amount".into(), "FY".into()],
            rows: vec![
                vec![
                    Cell::Text(" Acme\nCorp ".into()),
                    Cell::Text("$1,000".into()),
                    Cell::Text("FY23".into()),
                ],
                vec![Cell::Empty, Cell::Text("  ".into()), Cell::Empty],
                vec![
                    Cell::Text("Globex".into()),
                    Cell::Text("N/A".into()),
                    Cell::Number(2022.0),
                ],
            ],
        };

        let once = normalize_table(&raw);
        assert_eq!(once.columns, vec!["company", "contract_amount", "fy"]);
        assert_eq!(once.rows.len(), 2);
        assert_eq!(
            once.rows[0],
            vec![
                Cell::Text("Acme Corp".into()),
                Cell::Number(1000.0),
                Cell::Number(2023.0),
            ]
        );
        assert_eq!(once.rows[1][1], Cell::Empty);

        let twice = normalize_table(&once);
        assert_eq!(twice, once);
    }
}
