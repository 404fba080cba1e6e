//! Left join of contracts onto categorized companies.

use std::collections::HashMap;

use cb_core::{JoinedRecord, VendorCategory, VendorContract};
use tracing::debug;

use crate::filter::RecordFilter;

/// Joined rows, one per contract, in contract order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedTable {
    records: Vec<JoinedRecord>,
}

impl JoinedTable {
    #[must_use]
    pub const fn new(records: Vec<JoinedRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[JoinedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JoinedRecord> {
        self.records.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn matched(&self) -> usize {
        self.records.iter().filter(|r| r.is_matched()).count()
    }

    #[must_use]
    pub fn unmatched(&self) -> usize {
        self.len() - self.matched()
    }

    /// Share of rows with a category match; `0.0` for an empty table.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn match_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.matched() as f64 / self.len() as f64
        }
    }

    /// A new table holding the rows `filter` accepts. The source is untouched.
    #[must_use]
    pub fn filter(&self, filter: &RecordFilter) -> Self {
        Self::new(
            self.records
                .iter()
                .filter(|record| filter.matches(record))
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a JoinedTable {
    type Item = &'a JoinedRecord;
    type IntoIter = std::slice::Iter<'a, JoinedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Attach to each contract the first category row with the same vendor key.
///
/// Every contract appears exactly once in the output; contracts without a
/// match carry `None`.
#[must_use]
pub fn left_join(contracts: &[VendorContract], categories: &[VendorCategory]) -> JoinedTable {
    let mut by_key: HashMap<&str, &VendorCategory> = HashMap::with_capacity(categories.len());
    for category in categories {
        by_key.entry(category.vendor_key.as_str()).or_insert(category);
    }

    let records: Vec<JoinedRecord> = contracts
        .iter()
        .map(|contract| {
            let category = by_key.get(contract.vendor_key.as_str()).map(|c| (*c).clone());
            JoinedRecord::new(contract.clone(), category)
        })
        .collect();

    let table = JoinedTable::new(records);
    debug!(
        rows = table.len(),
        matched = table.matched(),
        "joined contracts to categories"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::{DesignationFlags, ProcurementCategory};

    fn contract(vendor: &str) -> VendorContract {
        VendorContract::new(vendor, vendor.to_lowercase(), ProcurementCategory::Ite)
    }

    fn category(vendor: &str, sub: &str) -> VendorCategory {
        VendorCategory::new(vendor, vendor.to_lowercase(), sub, DesignationFlags::default())
    }

    #[test]
    fn first_category_row_wins() {
        let joined = left_join(
            &[contract("Acme")],
            &[category("ACME", "Hardware"), category("acme", "Software")],
        );
        assert_eq!(joined.records()[0].sub_category(), Some("Hardware"));
    }

    #[test]
    fn every_contract_is_kept() {
        let contracts = [contract("Acme"), contract("Globex"), contract("Acme")];
        let joined = left_join(&contracts, &[category("Acme", "Hardware")]);
        assert_eq!(joined.len(), contracts.len());
        assert_eq!(joined.matched(), 2);
        assert_eq!(joined.unmatched(), 1);
        assert!((joined.match_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_table_has_zero_match_rate() {
        let joined = left_join(&[], &[category("Acme", "Hardware")]);
        assert!(joined.is_empty());
        assert!(joined.match_rate().abs() < f64::EPSILON);
    }
}
