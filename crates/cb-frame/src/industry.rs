//! Aggregates over the categorized-companies rows alone.

use std::collections::{BTreeMap, BTreeSet};

use cb_core::{AggregateRow, Designation, VendorCategory};

/// Companies per (industry, designation), keyed `[industry, designation label]`.
///
/// A company holding two designations counts once under each.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn designation_counts(categories: &[VendorCategory]) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<(String, Designation), usize> = BTreeMap::new();
    for row in categories {
        for designation in row.designations.iter() {
            *groups
                .entry((row.sub_category.clone(), designation))
                .or_default() += 1;
        }
    }
    groups
        .into_iter()
        .map(|((industry, designation), count)| {
            AggregateRow::new(
                vec![industry, designation.label().to_string()],
                count as f64,
                count,
            )
        })
        .collect()
}

/// Distinct companies per industry, ascending by industry.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn companies_per_industry(categories: &[VendorCategory]) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<&str, (BTreeSet<&str>, usize)> = BTreeMap::new();
    for row in categories {
        let (seen, rows) = groups.entry(row.sub_category.as_str()).or_default();
        seen.insert(row.vendor_key.as_str());
        *rows += 1;
    }
    groups
        .into_iter()
        .map(|(industry, (seen, rows))| {
            AggregateRow::new(vec![industry.to_string()], seen.len() as f64, rows)
        })
        .collect()
}

/// Industries in ascending order.
#[must_use]
pub fn industries(categories: &[VendorCategory]) -> Vec<String> {
    categories
        .iter()
        .map(|row| row.sub_category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::DesignationFlags;
    use pretty_assertions::assert_eq;

    fn company(vendor: &str, industry: &str, flags: DesignationFlags) -> VendorCategory {
        VendorCategory::new(vendor, vendor.to_lowercase(), industry, flags)
    }

    fn sample() -> Vec<VendorCategory> {
        let nl = DesignationFlags::default().with(Designation::NationalAndLocal);
        vec![
            company("Acme", "Hardware", nl.with(Designation::SgcTarget)),
            company("Globex", "Hardware", nl),
            company("Acme", "Software", DesignationFlags::default().with(Designation::Local)),
        ]
    }

    #[test]
    fn designations_count_per_industry() {
        let rows = designation_counts(&sample());
        let flat: Vec<_> = rows
            .iter()
            .map(|r| (r.key_at(0).to_string(), r.key_at(1).to_string(), r.count))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("Hardware".into(), "National & Local".into(), 2),
                ("Hardware".into(), "SGC Target".into(), 1),
                ("Software".into(), "Local".into(), 1),
            ]
        );
    }

    #[test]
    fn companies_are_counted_once_per_industry() {
        let rows = companies_per_industry(&sample());
        assert_eq!(rows[0].key(), "Hardware");
        assert_eq!(rows[0].count, 2);
        assert_eq!(industries(&sample()), vec!["Hardware", "Software"]);
    }
}
