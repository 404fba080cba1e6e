//! Join and aggregation properties over a small mixed data set.

use cb_core::{
    AggregateRow, DesignationFlags, ItSector, ProcurementCategory, VendorCategory, VendorContract,
};
use cb_frame::{GroupKey, RecordFilter, ValueColumn, group_count, group_sum, left_join};
use pretty_assertions::assert_eq;

fn contract(vendor: &str, category: ProcurementCategory, amount: Option<f64>) -> VendorContract {
    let mut row = VendorContract::new(vendor, vendor.to_lowercase(), category);
    row.amount = amount;
    row
}

fn company(vendor: &str, industry: &str) -> VendorCategory {
    VendorCategory::new(
        vendor,
        vendor.to_lowercase(),
        industry,
        DesignationFlags::default(),
    )
}

fn contracts() -> Vec<VendorContract> {
    vec![
        contract("Acme Corp", ProcurementCategory::Ite, Some(1000.0)),
        contract("Globex", ProcurementCategory::Its, Some(250.0)),
        contract("Initech", ProcurementCategory::Itt, None),
        contract("Umbrella", ProcurementCategory::Med, Some(75.5)),
        contract("Acme Corp", ProcurementCategory::Its, Some(20.0)),
    ]
}

fn companies() -> Vec<VendorCategory> {
    vec![
        company("ACME CORP", "Hardware"),
        company("Globex", "Software"),
        company("Umbrella", "Medical"),
    ]
}

#[test]
fn acme_joins_to_hardware_and_sums_by_sub_category() {
    let joined = left_join(
        &[contract("Acme Corp", ProcurementCategory::Other("IT".into()), Some(1000.0))],
        &[company("acme corp", "Hardware")],
    );
    assert_eq!(joined.records()[0].sub_category(), Some("Hardware"));

    let rows = group_sum(&joined, &[GroupKey::SubCategory], ValueColumn::Amount);
    assert_eq!(rows, vec![AggregateRow::new(vec!["Hardware".into()], 1000.0, 1)]);
}

#[test]
fn left_join_keeps_every_contract() {
    let contracts = contracts();
    let joined = left_join(&contracts, &companies());
    assert_eq!(joined.len(), contracts.len());
    assert_eq!(joined.unmatched(), 1);
}

#[test]
fn unmatched_vendor_counts_overall_but_not_by_sub_category() {
    let joined = left_join(&contracts(), &companies());
    let initech = &joined.records()[2];
    assert!(initech.category.is_none());

    let all: usize = group_count(&joined, &[]).iter().map(|row| row.count).sum();
    assert_eq!(all, 5);

    let by_sub: usize = group_count(&joined, &[GroupKey::SubCategory])
        .iter()
        .map(|row| row.count)
        .sum();
    assert_eq!(by_sub, 4);
}

#[test]
fn group_sum_conserves_the_total() {
    let joined = left_join(&contracts(), &companies());
    let total: f64 = joined.iter().filter_map(|r| r.contract.amount).sum();

    for keys in [
        vec![GroupKey::Category],
        vec![GroupKey::Vendor],
        vec![GroupKey::Vendor, GroupKey::Category],
        vec![],
    ] {
        let grouped: f64 = group_sum(&joined, &keys, ValueColumn::Amount)
            .iter()
            .map(|row| row.value)
            .sum();
        assert!((grouped - total).abs() < 1e-9, "keys {keys:?}");
    }
}

#[test]
fn missing_amount_is_excluded_from_sum_but_row_is_counted() {
    let joined = left_join(&contracts(), &companies());
    let sums = group_sum(&joined, &[GroupKey::Category], ValueColumn::Amount);
    let itt = sums.iter().find(|row| row.key() == "ITT").expect("ITT group");
    assert_eq!(itt.value, 0.0);
    assert_eq!(itt.count, 0);

    let counts = group_count(&joined, &[GroupKey::Category]);
    let itt = counts.iter().find(|row| row.key() == "ITT").expect("ITT group");
    assert_eq!(itt.count, 1);
}

#[test]
fn filtered_aggregation_is_a_subset_of_unfiltered() {
    let joined = left_join(&contracts(), &companies());
    let unfiltered = group_sum(&joined, &[GroupKey::Category], ValueColumn::Amount);

    for filter in [
        RecordFilter::ItSector(ItSector::Hardware),
        RecordFilter::ItSector(ItSector::Software),
        RecordFilter::ItSector(ItSector::Telecom),
    ] {
        let filtered = joined.filter(&filter);
        assert!(filtered.iter().all(|record| filter.matches(record)));

        for row in group_sum(&filtered, &[GroupKey::Category], ValueColumn::Amount) {
            let full = unfiltered
                .iter()
                .find(|candidate| candidate.keys == row.keys)
                .expect("filtered group exists unfiltered");
            assert!(row.value <= full.value + 1e-9);
            assert!(row.count <= full.count);
        }
    }
    assert_eq!(joined.len(), 5, "filtering leaves the source untouched");
}
