//! IT Sector tab: top companies, vendor concentration, sector radar.

use cb_core::{ChartId, ItSector, JoinedRecord};
use cb_frame::{GroupKey, RecordFilter, ValueColumn, group_count_distinct, group_max, stats};

use super::{by_value_desc, in_it_sector, no_data, with_sdo};
use crate::dashboard::Dashboard;
use crate::spec::{
    BarChart, BarSeries, ChartBody, ChartSpec, Orientation, PieChart, RadarChart, RadarSeries,
    ValueFormat,
};
use crate::theme;

const RADAR_AXES: [&str; 5] = [
    "Avg SDO",
    "Median SDO",
    "Max SDO",
    "Vendor Count",
    "Coverage Rate",
];

/// Highest capped SDO commitment per (company, IT category), top N.
#[must_use]
pub fn top_it_companies(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let top_n = dashboard.config().top_companies;
    let title = format!(
        "Top {top_n} IT Companies by SDO Commitment ({})",
        filter.label()
    );
    let records = dashboard.records(filter);

    let mut rows = group_max(
        with_sdo(in_it_sector(records.iter())),
        &[GroupKey::Vendor, GroupKey::CategoryLabel],
        ValueColumn::SdoCapped,
    );
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::TopItCompanies, title, 550, no_data(filter));
    }
    rows.sort_by(by_value_desc);
    rows.truncate(top_n);
    rows.reverse();

    let mut series: Vec<BarSeries> = Vec::new();
    let mut label_order: Vec<String> = Vec::new();
    for row in &rows {
        let vendor = row.key_at(0).to_string();
        let category = row.key_at(1);
        if !label_order.contains(&vendor) {
            label_order.push(vendor.clone());
        }

        let index = match series.iter().position(|s| s.name == category) {
            Some(index) => index,
            None => {
                series.push(BarSeries {
                    name: category.to_string(),
                    labels: Vec::new(),
                    values: Vec::new(),
                    color: Some(theme::series_color(series.len()).to_string()),
                    hover: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[index].labels.push(vendor);
        series[index].values.push(row.value);
    }

    ChartSpec::new(
        ChartId::TopItCompanies,
        title,
        550,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Horizontal,
            grouped: false,
            value_format: ValueFormat::Percent,
            value_title: "SDO Commitment %".to_string(),
            label_title: String::new(),
            color_scale: None,
            label_order,
            series,
        }),
    )
}

/// Share of distinct IT contract codes held by the largest IT vendors.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn it_concentration(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "IT Sector Vendor Concentration";
    let records = dashboard.records(filter);

    let mut rows = group_count_distinct(
        in_it_sector(records.iter()),
        &[GroupKey::Vendor],
        GroupKey::ContractCode,
    );
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::ItConcentration, title, 500, no_data(filter));
    }
    rows.sort_by(by_value_desc);

    let top_n = dashboard.config().top_concentration;
    let rest = rows.split_off(top_n.min(rows.len()));
    let mut labels: Vec<String> = rows.iter().map(|row| row.key().to_string()).collect();
    let mut values: Vec<f64> = rows.iter().map(|row| row.value).collect();
    if !rest.is_empty() {
        labels.push(format!("Other ({} companies)", rest.len()));
        values.push(rest.iter().map(|row| row.value).sum());
    }

    ChartSpec::new(
        ChartId::ItConcentration,
        title,
        500,
        ChartBody::Pie(PieChart {
            labels,
            values,
            hole: 0.5,
        }),
    )
}

/// Five SDO metrics per IT category, each axis scaled so its largest value is 100.
#[must_use]
pub fn it_radar(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "IT Sub-Category Comparison (Normalized Radar)";
    let records = dashboard.records(filter);

    let metrics: Vec<(ItSector, [f64; 5])> = ItSector::ALL
        .into_iter()
        .filter_map(|sector| {
            let category = sector.category();
            let rows: Vec<&JoinedRecord> = records
                .iter()
                .filter(|record| record.contract.category == category)
                .collect();
            sector_metrics(&rows).map(|raw| (sector, raw))
        })
        .collect();
    if metrics.is_empty() {
        return ChartSpec::empty(ChartId::ItRadar, title, 450, no_data(filter));
    }

    let mut axis_max = [0.0_f64; 5];
    for (_, raw) in &metrics {
        for (max, value) in axis_max.iter_mut().zip(raw) {
            *max = max.max(*value);
        }
    }

    let series = metrics
        .iter()
        .map(|(sector, raw)| {
            let mut values: Vec<f64> = raw
                .iter()
                .zip(axis_max)
                .map(|(value, max)| if max > 0.0 { value / max * 100.0 } else { 0.0 })
                .collect();
            values.push(values[0]);
            RadarSeries {
                name: sector.category().label().to_string(),
                color: theme::series_color(*sector as usize).to_string(),
                values,
            }
        })
        .collect();

    let mut axes: Vec<String> = RADAR_AXES.iter().map(ToString::to_string).collect();
    axes.push(RADAR_AXES[0].to_string());

    ChartSpec::new(
        ChartId::ItRadar,
        title,
        450,
        ChartBody::Radar(RadarChart {
            axes,
            series,
            range_max: 110.0,
        }),
    )
}

/// Raw radar values for one category's rows; `None` when there are none.
#[allow(clippy::cast_precision_loss)]
fn sector_metrics(rows: &[&JoinedRecord]) -> Option<[f64; 5]> {
    if rows.is_empty() {
        return None;
    }
    let sdo: Vec<f64> = rows
        .iter()
        .filter_map(|record| record.contract.sdo_capped())
        .collect();
    let covered = rows.iter().filter(|record| record.contract.has_sdo()).count();

    Some([
        stats::mean(&sdo).unwrap_or(0.0) * 100.0,
        stats::median(&sdo).unwrap_or(0.0) * 100.0,
        stats::max(&sdo).unwrap_or(0.0) * 100.0,
        sdo.len() as f64,
        covered as f64 / rows.len() as f64 * 100.0,
    ])
}
