//! Serde roundtrip and JsonSchema validation tests for API payload types.

use cb_core::responses::{CategorySummary, KpiSummary, LoadReport};
use cb_core::{AggregateRow, DesignationFlags, Designation, ItSector};
use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    kpi_summary_roundtrip,
    KpiSummary,
    KpiSummary {
        total_vendors: 812,
        average_sdo: Some(0.125),
        categories: 15,
        it_vendors: 240,
        industries: 10,
        match_rate: 0.5,
        contract_rows: 2048,
        category_rows: 640,
    }
);

roundtrip_and_validate!(
    kpi_summary_without_sdo_roundtrip,
    KpiSummary,
    KpiSummary {
        total_vendors: 0,
        average_sdo: None,
        categories: 0,
        it_vendors: 0,
        industries: 0,
        match_rate: 0.0,
        contract_rows: 0,
        category_rows: 0,
    }
);

roundtrip_and_validate!(
    category_summary_roundtrip,
    CategorySummary,
    CategorySummary {
        code: "ITE".into(),
        label: "IT Equipment & Services".into(),
        rows: 120,
        vendors: 80,
        sdo_rows: 90,
        coverage_rate: 0.75,
        average_sdo: Some(0.1),
        median_sdo: Some(0.05),
        max_sdo: Some(1.0),
        outliers: 3,
        total_amount: 125_000.5,
    }
);

roundtrip_and_validate!(
    load_report_roundtrip,
    LoadReport,
    LoadReport {
        contracts_file: "contracts.xlsx".into(),
        categories_file: "categories.xlsx".into(),
        contract_rows: 10,
        category_rows: 4,
        matched_rows: 6,
        unmatched_rows: 4,
        skipped_sheets: vec!["Abbreviations".into()],
        dropped_rows: 2,
        loaded_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    aggregate_row_roundtrip,
    AggregateRow,
    AggregateRow::new(vec!["Hardware".into()], 1000.0, 1)
);

roundtrip_and_validate!(
    designation_flags_roundtrip,
    DesignationFlags,
    DesignationFlags::default().with(Designation::Local)
);

roundtrip_and_validate!(it_sector_roundtrip, ItSector, ItSector::Telecom);
