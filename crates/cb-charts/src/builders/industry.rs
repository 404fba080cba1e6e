//! Industry Analysis tab, built from the categorized-companies rows.

use std::collections::HashMap;

use cb_core::{ChartId, Designation};
use cb_frame::{RecordFilter, industry};

use super::{by_value_desc, no_data};
use crate::dashboard::Dashboard;
use crate::spec::{
    BarChart, BarSeries, ChartBody, ChartSpec, HeatmapChart, Orientation, ValueFormat,
};
use crate::theme;

const fn designation_color(designation: Designation) -> &'static str {
    match designation {
        Designation::NationalAndLocal => theme::ACCENT,
        Designation::Local => theme::ACCENT2,
        Designation::SgcTarget => theme::ACCENT3,
    }
}

/// Companies per industry, one bar series per designation.
#[must_use]
pub fn national_vs_local(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "National vs Local Company Presence by Industry";
    let companies = dashboard.companies();

    let counts = industry::designation_counts(companies);
    if counts.is_empty() {
        return ChartSpec::empty(ChartId::NationalVsLocal, title, 500, no_data(filter));
    }

    let series = Designation::ALL
        .into_iter()
        .filter_map(|designation| {
            let rows: Vec<_> = counts
                .iter()
                .filter(|row| row.key_at(1) == designation.label())
                .collect();
            if rows.is_empty() {
                return None;
            }
            Some(BarSeries {
                name: designation.label().to_string(),
                labels: rows.iter().map(|row| row.key_at(0).to_string()).collect(),
                values: rows.iter().map(|row| row.value).collect(),
                color: Some(designation_color(designation).to_string()),
                hover: Vec::new(),
            })
        })
        .collect();

    ChartSpec::new(
        ChartId::NationalVsLocal,
        title,
        500,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Horizontal,
            grouped: true,
            value_format: ValueFormat::Count,
            value_title: "Number of Companies".to_string(),
            label_title: String::new(),
            color_scale: None,
            label_order: industry::industries(companies),
            series,
        }),
    )
}

/// Industry by designation count grid; absent pairs are zero.
#[must_use]
pub fn industry_heatmap(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Industry Diversity: National vs Local vs SGC Target";
    let companies = dashboard.companies();

    let industries = industry::industries(companies);
    if industries.is_empty() {
        return ChartSpec::empty(ChartId::IndustryHeatmap, title, 500, no_data(filter));
    }

    let rows = industry::designation_counts(companies);
    let counts: HashMap<(&str, &str), f64> = rows
        .iter()
        .map(|row| ((row.key_at(0), row.key_at(1)), row.value))
        .collect();

    let z = industries
        .iter()
        .map(|industry| {
            Designation::ALL
                .iter()
                .map(|designation| {
                    counts
                        .get(&(industry.as_str(), designation.label()))
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    ChartSpec::new(
        ChartId::IndustryHeatmap,
        title,
        500,
        ChartBody::Heatmap(HeatmapChart {
            x: Designation::ALL
                .iter()
                .map(|designation| designation.label().to_string())
                .collect(),
            y: industries,
            z,
            color_scale: "YlOrRd".to_string(),
        }),
    )
}

/// Distinct companies per industry, most crowded first.
#[must_use]
pub fn sector_density(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Company Density by Industry";
    let companies = dashboard.companies();

    let mut rows = industry::companies_per_industry(companies);
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::SectorDensity, title, 450, no_data(filter));
    }
    rows.sort_by(by_value_desc);

    ChartSpec::new(
        ChartId::SectorDensity,
        title,
        450,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Vertical,
            grouped: false,
            value_format: ValueFormat::Count,
            value_title: "Number of Companies".to_string(),
            label_title: "Industry".to_string(),
            color_scale: None,
            label_order: Vec::new(),
            series: vec![BarSeries {
                name: "Companies".to_string(),
                labels: rows.iter().map(|row| row.key().to_string()).collect(),
                values: rows.iter().map(|row| row.value).collect(),
                color: Some(theme::AMBER.to_string()),
                hover: rows
                    .iter()
                    .map(|row| format!("Category rows: {}", row.count))
                    .collect(),
            }],
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn designations_become_series() {
        let spec = national_vs_local(&fixtures::dashboard(), &RecordFilter::All);
        let ChartBody::Bar(chart) = &spec.body else {
            panic!("expected a bar chart");
        };
        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["National & Local", "Local", "SGC Target"]);
        assert_eq!(chart.series[1].labels, vec!["Hardware", "Software"]);
        assert_eq!(chart.series[0].color.as_deref(), Some(theme::ACCENT));
        assert_eq!(chart.label_order, vec!["Hardware", "Medical", "Software"]);
    }

    #[test]
    fn heatmap_fills_missing_pairs_with_zero() {
        let spec = industry_heatmap(&fixtures::dashboard(), &RecordFilter::All);
        let ChartBody::Heatmap(heatmap) = &spec.body else {
            panic!("expected a heatmap");
        };
        assert_eq!(heatmap.y, vec!["Hardware", "Medical", "Software"]);
        assert_eq!(heatmap.x, vec!["National & Local", "Local", "SGC Target"]);
        assert_eq!(
            heatmap.z,
            vec![
                vec![1.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
            ]
        );
    }

    #[test]
    fn density_sorted_descending() {
        let spec = sector_density(&fixtures::dashboard(), &RecordFilter::All);
        let ChartBody::Bar(chart) = &spec.body else {
            panic!("expected a bar chart");
        };
        assert_eq!(chart.series[0].labels, vec!["Hardware", "Medical", "Software"]);
        assert_eq!(chart.series[0].values, vec![2.0, 1.0, 1.0]);
    }
}
