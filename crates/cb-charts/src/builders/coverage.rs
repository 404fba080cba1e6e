//! Vendor Coverage tab.

use cb_core::ChartId;
use cb_frame::{GroupKey, RecordFilter, ValueColumn, group_count, group_count_distinct, group_sum};

use super::{by_value_desc, no_data};
use crate::dashboard::Dashboard;
use crate::spec::{
    BarChart, BarSeries, ChartBody, ChartSpec, Orientation, TreemapChart, ValueFormat,
};
use crate::theme;

/// Rows with and without an SDO figure, per category.
#[must_use]
pub fn sdo_coverage(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "SDO Coverage: Vendors with Valid SDO vs Missing";
    let records = dashboard.records(filter);

    let totals = group_count(records.iter(), &[GroupKey::CategoryLabel]);
    if totals.is_empty() {
        return ChartSpec::empty(ChartId::SdoCoverage, title, 550, no_data(filter));
    }
    let covered = group_count(
        records.iter().filter(|record| record.contract.has_sdo()),
        &[GroupKey::CategoryLabel],
    );

    let labels: Vec<String> = totals.iter().map(|row| row.key().to_string()).collect();
    let has: Vec<f64> = totals
        .iter()
        .map(|total| {
            covered
                .iter()
                .find(|row| row.keys == total.keys)
                .map_or(0.0, |row| row.value)
        })
        .collect();
    let missing: Vec<f64> = totals
        .iter()
        .zip(&has)
        .map(|(total, has)| total.value - has)
        .collect();

    let series = vec![
        BarSeries {
            name: "Has SDO".to_string(),
            labels: labels.clone(),
            values: has,
            color: Some(theme::ACCENT4.to_string()),
            hover: Vec::new(),
        },
        BarSeries {
            name: "No SDO".to_string(),
            labels,
            values: missing,
            color: Some(theme::ACCENT3.to_string()),
            hover: Vec::new(),
        },
    ];

    ChartSpec::new(
        ChartId::SdoCoverage,
        title,
        550,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Horizontal,
            grouped: true,
            value_format: ValueFormat::Count,
            value_title: "Number of Vendors".to_string(),
            label_title: String::new(),
            color_scale: None,
            label_order: Vec::new(),
            series,
        }),
    )
}

/// Distinct vendors per category.
#[must_use]
pub fn vendor_treemap(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Vendor Distribution Across Procurement Categories";
    let records = dashboard.records(filter);

    let rows = group_count_distinct(
        records.iter(),
        &[GroupKey::CategoryLabel],
        GroupKey::VendorKey,
    );
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::VendorTreemap, title, 500, no_data(filter));
    }

    ChartSpec::new(
        ChartId::VendorTreemap,
        title,
        500,
        ChartBody::Treemap(TreemapChart {
            labels: rows.iter().map(|row| row.key().to_string()).collect(),
            values: rows.iter().map(|row| row.value).collect(),
            color_scale: "Teal".to_string(),
        }),
    )
}

/// Contract codes with the most distinct vendors. Codes longer than
/// `max_code_len` are free-text notes rather than codes and are left out.
#[must_use]
pub fn contract_codes(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let config = dashboard.config();
    let title = format!(
        "Top {} Contract Sub-Categories by Vendor Count",
        config.top_contract_codes
    );
    let records = dashboard.records(filter);

    let mut rows: Vec<_> = group_count_distinct(
        records.iter(),
        &[GroupKey::ContractCode],
        GroupKey::VendorKey,
    )
    .into_iter()
    .filter(|row| row.key().chars().count() <= config.max_code_len)
    .collect();
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::ContractCodes, title, 450, no_data(filter));
    }
    rows.sort_by(by_value_desc);
    rows.truncate(config.top_contract_codes);

    ChartSpec::new(
        ChartId::ContractCodes,
        title,
        450,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Vertical,
            grouped: false,
            value_format: ValueFormat::Count,
            value_title: "Unique Vendors".to_string(),
            label_title: "Contract Code".to_string(),
            color_scale: Some("Sunset".to_string()),
            label_order: Vec::new(),
            series: vec![BarSeries {
                name: "Vendors".to_string(),
                labels: rows.iter().map(|row| row.key().to_string()).collect(),
                values: rows.iter().map(|row| row.value).collect(),
                color: None,
                hover: Vec::new(),
            }],
        }),
    )
}

/// Total contract amount per industry of the matched company, largest first.
/// Unmatched contracts have no industry and are not shown.
#[must_use]
pub fn amount_by_sub_category(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Contract Amount by Industry";
    let records = dashboard.records(filter);

    let mut rows: Vec<_> = group_sum(records.iter(), &[GroupKey::SubCategory], ValueColumn::Amount)
        .into_iter()
        .filter(|row| row.count > 0)
        .collect();
    if rows.is_empty() {
        return ChartSpec::empty(
            ChartId::AmountBySubCategory,
            title,
            450,
            "No contract amounts for categorized companies",
        );
    }
    rows.sort_by(by_value_desc);

    ChartSpec::new(
        ChartId::AmountBySubCategory,
        title,
        450,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Vertical,
            grouped: false,
            value_format: ValueFormat::Currency,
            value_title: "Contract Amount".to_string(),
            label_title: "Industry".to_string(),
            color_scale: None,
            label_order: Vec::new(),
            series: vec![BarSeries {
                name: "Amount".to_string(),
                labels: rows.iter().map(|row| row.key().to_string()).collect(),
                values: rows.iter().map(|row| row.value).collect(),
                color: Some(theme::ACCENT.to_string()),
                hover: rows
                    .iter()
                    .map(|row| format!("Contracts with amounts: {}", row.count))
                    .collect(),
            }],
        }),
    )
}
