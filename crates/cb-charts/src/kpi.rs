//! Headline numbers and per-category statistics.

use std::collections::BTreeMap;

use cb_core::responses::{CategorySummary, KpiSummary};
use cb_core::{JoinedRecord, ProcurementCategory};
use cb_frame::{GroupKey, distinct, industry, stats};

use crate::builders::in_it_sector;
use crate::dashboard::Dashboard;

/// KPI row values over the whole, unfiltered data.
#[must_use]
pub fn kpi_summary(dashboard: &Dashboard) -> KpiSummary {
    let joined = dashboard.joined();
    let sdo: Vec<f64> = joined
        .iter()
        .filter_map(|record| record.contract.sdo_capped())
        .collect();

    KpiSummary {
        total_vendors: distinct(joined, GroupKey::VendorKey).len(),
        average_sdo: stats::mean(&sdo),
        categories: distinct(joined, GroupKey::Category).len(),
        it_vendors: distinct(in_it_sector(joined), GroupKey::VendorKey).len(),
        industries: industry::industries(dashboard.companies()).len(),
        match_rate: joined.match_rate(),
        contract_rows: joined.len(),
        category_rows: dashboard.companies().len(),
    }
}

/// One summary per procurement category present, in code order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn category_summaries(dashboard: &Dashboard) -> Vec<CategorySummary> {
    let mut by_category: BTreeMap<String, (ProcurementCategory, Vec<&JoinedRecord>)> =
        BTreeMap::new();
    for record in dashboard.joined() {
        let category = &record.contract.category;
        by_category
            .entry(category.code().to_string())
            .or_insert_with(|| (category.clone(), Vec::new()))
            .1
            .push(record);
    }

    by_category
        .into_iter()
        .map(|(code, (category, rows))| {
            let sdo: Vec<f64> = rows
                .iter()
                .filter_map(|record| record.contract.sdo_capped())
                .collect();
            let sdo_rows = rows.iter().filter(|record| record.contract.has_sdo()).count();
            CategorySummary {
                code,
                label: category.label().to_string(),
                rows: rows.len(),
                vendors: distinct(rows.iter().copied(), GroupKey::VendorKey).len(),
                sdo_rows,
                coverage_rate: sdo_rows as f64 / rows.len() as f64,
                average_sdo: stats::mean(&sdo),
                median_sdo: stats::median(&sdo),
                max_sdo: stats::max(&sdo),
                outliers: stats::iqr_outliers(&sdo).len(),
                total_amount: rows.iter().filter_map(|record| record.contract.amount).sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn kpis_over_fixture() {
        let kpis = kpi_summary(&fixtures::dashboard());
        assert_eq!(kpis.total_vendors, 5);
        assert_eq!(kpis.categories, 5);
        assert_eq!(kpis.it_vendors, 3);
        assert_eq!(kpis.industries, 3);
        assert_eq!(kpis.contract_rows, 8);
        assert_eq!(kpis.category_rows, 4);
        assert!((kpis.match_rate - 7.0 / 8.0).abs() < 1e-12);

        let average = kpis.average_sdo.expect("positive commitments exist");
        assert!((average - 1.9 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn summaries_per_category_in_code_order() {
        let summaries = category_summaries(&fixtures::dashboard());
        let codes: Vec<_> = summaries.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["ITE", "ITS", "ITT", "MED", "PRF"]);

        let its = &summaries[1];
        assert_eq!(its.rows, 3);
        assert_eq!(its.vendors, 2);
        assert_eq!(its.sdo_rows, 3);
        assert!((its.coverage_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(its.max_sdo, Some(0.10));
        assert!((its.total_amount - 800.0).abs() < f64::EPSILON);

        let itt = &summaries[2];
        assert_eq!(itt.sdo_rows, 0);
        assert_eq!(itt.average_sdo, None);
    }
}
