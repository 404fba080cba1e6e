//! Groupwise aggregation over joined records.
//!
//! Every function groups by a tuple of [`GroupKey`]s. A record whose key
//! tuple has a missing component (an unmatched contract grouped by
//! sub-category, say) is left out of that grouping. Groups come back in
//! ascending key order; ordering for display is up to the caller.

use std::collections::{BTreeMap, BTreeSet};

use cb_core::{AggregateRow, JoinedRecord};

use crate::stats;

/// A column to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Vendor name as written.
    Vendor,
    /// Folded vendor name; use this to count companies.
    VendorKey,
    /// Procurement category code, e.g. `ITE`.
    Category,
    /// Procurement category display label.
    CategoryLabel,
    ContractCode,
    /// Industry of the matched company.
    SubCategory,
    FiscalYear,
    /// `hardware`, `software` or `telecom`; missing outside the IT sector.
    ItSector,
}

impl GroupKey {
    #[must_use]
    pub fn value(self, record: &JoinedRecord) -> Option<String> {
        let contract = &record.contract;
        match self {
            Self::Vendor => Some(contract.vendor.clone()),
            Self::VendorKey => Some(contract.vendor_key.clone()),
            Self::Category => Some(contract.category.code().to_string()),
            Self::CategoryLabel => Some(contract.category.label().to_string()),
            Self::ContractCode => contract.contract_code.clone(),
            Self::SubCategory => record.sub_category().map(str::to_string),
            Self::FiscalYear => contract.fiscal_year.map(|year| year.to_string()),
            Self::ItSector => contract
                .category
                .it_sector()
                .map(|sector| sector.as_str().to_string()),
        }
    }

    fn tuple(keys: &[Self], record: &JoinedRecord) -> Option<Vec<String>> {
        keys.iter().map(|key| key.value(record)).collect()
    }
}

/// A numeric column to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueColumn {
    Amount,
    /// SDO commitment as loaded.
    SdoPct,
    /// SDO commitment when strictly positive, clipped to 1.0.
    SdoCapped,
}

impl ValueColumn {
    #[must_use]
    pub fn value(self, record: &JoinedRecord) -> Option<f64> {
        match self {
            Self::Amount => record.contract.amount,
            Self::SdoPct => record.contract.sdo_pct,
            Self::SdoCapped => record.contract.sdo_capped(),
        }
    }
}

/// Values of one group, for box plots and histograms.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupValues {
    pub keys: Vec<String>,
    pub values: Vec<f64>,
}

/// Present values per group. Groups whose rows all lack a value still appear,
/// with an empty list.
fn collect<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> BTreeMap<Vec<String>, Vec<f64>>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    let mut groups: BTreeMap<Vec<String>, Vec<f64>> = BTreeMap::new();
    for record in records {
        let Some(key) = GroupKey::tuple(keys, record) else {
            continue;
        };
        let values = groups.entry(key).or_default();
        if let Some(value) = column.value(record) {
            values.push(value);
        }
    }
    groups
}

/// Sum of `column` per group. Missing values are excluded; `count` is the
/// number of values summed, and a group with none sums to `0.0`.
pub fn group_sum<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    collect(records, keys, column)
        .into_iter()
        .map(|(key, values)| AggregateRow::new(key, values.iter().sum(), values.len()))
        .collect()
}

/// Row count per group; `value` repeats `count` as a float.
#[allow(clippy::cast_precision_loss)]
pub fn group_count<'a, I>(records: I, keys: &[GroupKey]) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    let mut groups: BTreeMap<Vec<String>, usize> = BTreeMap::new();
    for record in records {
        if let Some(key) = GroupKey::tuple(keys, record) {
            *groups.entry(key).or_default() += 1;
        }
    }
    groups
        .into_iter()
        .map(|(key, count)| AggregateRow::new(key, count as f64, count))
        .collect()
}

/// Mean of `column` per group. Groups without any value are omitted.
pub fn group_mean<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    reduce(records, keys, column, stats::mean)
}

/// Maximum of `column` per group. Groups without any value are omitted.
pub fn group_max<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    reduce(records, keys, column, stats::max)
}

/// Median of `column` per group. Groups without any value are omitted.
pub fn group_median<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    reduce(records, keys, column, stats::median)
}

fn reduce<'a, I>(
    records: I,
    keys: &[GroupKey],
    column: ValueColumn,
    op: fn(&[f64]) -> Option<f64>,
) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    collect(records, keys, column)
        .into_iter()
        .filter_map(|(key, values)| op(&values).map(|value| AggregateRow::new(key, value, values.len())))
        .collect()
}

/// Number of distinct `distinct` values per group.
///
/// `count` is the number of rows in the group that had a `distinct` value.
#[allow(clippy::cast_precision_loss)]
pub fn group_count_distinct<'a, I>(
    records: I,
    keys: &[GroupKey],
    distinct: GroupKey,
) -> Vec<AggregateRow>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    let mut groups: BTreeMap<Vec<String>, (BTreeSet<String>, usize)> = BTreeMap::new();
    for record in records {
        let (Some(key), Some(value)) = (GroupKey::tuple(keys, record), distinct.value(record)) else {
            continue;
        };
        let (seen, rows) = groups.entry(key).or_default();
        seen.insert(value);
        *rows += 1;
    }
    groups
        .into_iter()
        .map(|(key, (seen, rows))| AggregateRow::new(key, seen.len() as f64, rows))
        .collect()
}

/// Present values of `column` per group. Groups without any value are omitted.
pub fn group_values<'a, I>(records: I, keys: &[GroupKey], column: ValueColumn) -> Vec<GroupValues>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    collect(records, keys, column)
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(keys, values)| GroupValues { keys, values })
        .collect()
}

/// Distinct values of `key` over `records`, ascending.
pub fn distinct<'a, I>(records: I, key: GroupKey) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    records.into_iter().filter_map(|record| key.value(record)).collect()
}
