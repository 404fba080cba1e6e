//! One pure builder per chart, grouped by tab.
//!
//! Builders read the [`Dashboard`] and a [`RecordFilter`] and return a
//! [`ChartSpec`]. When the filtered data is empty they return an empty-state
//! chart instead of failing.

pub mod coverage;
pub mod cross_category;
pub mod industry;
pub mod it_sector;

use std::cmp::Ordering;

use cb_core::{AggregateRow, ChartId, JoinedRecord};
use cb_frame::RecordFilter;

use crate::dashboard::Dashboard;
use crate::spec::ChartSpec;

static UNFILTERED: RecordFilter = RecordFilter::All;

/// Build `chart`. Charts that ignore the IT sector filter are built from
/// the full data whatever `filter` says.
#[must_use]
pub fn build(dashboard: &Dashboard, chart: ChartId, filter: &RecordFilter) -> ChartSpec {
    let filter = if chart.is_filterable() {
        filter
    } else {
        &UNFILTERED
    };

    match chart {
        ChartId::TopItCompanies => it_sector::top_it_companies(dashboard, filter),
        ChartId::ItConcentration => it_sector::it_concentration(dashboard, filter),
        ChartId::ItRadar => it_sector::it_radar(dashboard, filter),
        ChartId::AvgSdoByCategory => cross_category::avg_sdo_by_category(dashboard, filter),
        ChartId::SdoDistribution => cross_category::sdo_distribution(dashboard, filter),
        ChartId::VendorsVsSdo => cross_category::vendors_vs_sdo(dashboard, filter),
        ChartId::SdoHistogram => cross_category::sdo_histogram(dashboard, filter),
        ChartId::SdoCoverage => coverage::sdo_coverage(dashboard, filter),
        ChartId::VendorTreemap => coverage::vendor_treemap(dashboard, filter),
        ChartId::ContractCodes => coverage::contract_codes(dashboard, filter),
        ChartId::AmountBySubCategory => coverage::amount_by_sub_category(dashboard, filter),
        ChartId::NationalVsLocal => industry::national_vs_local(dashboard, filter),
        ChartId::IndustryHeatmap => industry::industry_heatmap(dashboard, filter),
        ChartId::SectorDensity => industry::sector_density(dashboard, filter),
    }
}

/// Empty-state message for a filter.
pub(crate) fn no_data(filter: &RecordFilter) -> String {
    match filter {
        RecordFilter::All => "No data available".to_string(),
        other => format!("No data for {}", other.label()),
    }
}

/// Records with a positive SDO commitment.
pub(crate) fn with_sdo<'a>(
    records: impl IntoIterator<Item = &'a JoinedRecord>,
) -> impl Iterator<Item = &'a JoinedRecord> {
    records
        .into_iter()
        .filter(|record| record.contract.sdo_capped().is_some())
}

/// Records in the IT sector (ITE, ITS, ITT).
pub(crate) fn in_it_sector<'a>(
    records: impl IntoIterator<Item = &'a JoinedRecord>,
) -> impl Iterator<Item = &'a JoinedRecord> {
    records
        .into_iter()
        .filter(|record| record.contract.category.it_sector().is_some())
}

/// Largest value first; ties by key, ascending.
pub(crate) fn by_value_desc(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    b.value.total_cmp(&a.value).then_with(|| a.keys.cmp(&b.keys))
}

/// Smallest value first; ties by key, ascending.
pub(crate) fn by_value_asc(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    a.value.total_cmp(&b.value).then_with(|| a.keys.cmp(&b.keys))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use cb_config::ChartsConfig;
    use cb_core::{
        Designation, DesignationFlags, ProcurementCategory, VendorCategory, VendorContract,
    };

    use crate::dashboard::Dashboard;

    pub fn contract(
        vendor: &str,
        category: ProcurementCategory,
        code: &str,
        sdo: Option<f64>,
        amount: Option<f64>,
    ) -> VendorContract {
        let mut row = VendorContract::new(vendor, vendor.to_lowercase(), category);
        row.contract_code = Some(code.to_string());
        row.sdo_pct = sdo;
        row.amount = amount;
        row
    }

    pub fn company(vendor: &str, industry: &str, designation: Designation) -> VendorCategory {
        VendorCategory::new(
            vendor,
            vendor.to_lowercase(),
            industry,
            DesignationFlags::default().with(designation),
        )
    }

    /// Three IT vendors, two non-IT vendors, one unmatched vendor.
    pub fn dashboard() -> Dashboard {
        use ProcurementCategory::{Ite, Its, Itt, Med, Prf};
        let contracts = vec![
            contract("Acme", Ite, "ITE47", Some(0.25), Some(1000.0)),
            contract("Acme", Its, "ITS75", Some(0.10), Some(500.0)),
            contract("Globex", Ite, "ITE47", Some(1.5), None),
            contract("Globex", Itt, "ITT46", None, Some(200.0)),
            contract("Initech", Its, "ITS75", Some(0.05), Some(300.0)),
            contract("Initech", Its, "ITS77", Some(0.0), None),
            contract("Umbrella", Med, "MED60", Some(0.2), Some(50.0)),
            contract("Hooli", Prf, "PRF73", Some(0.3), Some(75.0)),
        ];
        let companies = vec![
            company("Acme", "Hardware", Designation::NationalAndLocal),
            company("Globex", "Hardware", Designation::Local),
            company("Umbrella", "Medical", Designation::SgcTarget),
            company("Initech", "Software", Designation::Local),
        ];
        Dashboard::from_rows(contracts, companies, ChartsConfig::default())
    }
}
