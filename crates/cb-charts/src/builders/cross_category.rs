//! Cross-Category tab: SDO commitments compared across procurement categories.

use std::collections::BTreeMap;

use cb_core::ChartId;
use cb_frame::{
    GroupKey, RecordFilter, ValueColumn, group_count_distinct, group_mean, group_values, stats,
};

use super::{by_value_asc, no_data, with_sdo};
use crate::dashboard::Dashboard;
use crate::spec::{
    BarChart, BarSeries, BoxChart, BoxGroup, ChartBody, ChartSpec, HistogramBin, HistogramChart,
    Orientation, ScatterChart, ScatterPoint, TrendLine, ValueFormat,
};

/// Points on the fitted trend line.
const TREND_POINTS: usize = 50;

/// Mean capped SDO per category, lowest first.
#[must_use]
pub fn avg_sdo_by_category(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Average SDO Commitment by Procurement Category";
    let records = dashboard.records(filter);

    let mut rows = group_mean(
        with_sdo(records.iter()),
        &[GroupKey::CategoryLabel],
        ValueColumn::SdoCapped,
    );
    if rows.is_empty() {
        return ChartSpec::empty(ChartId::AvgSdoByCategory, title, 550, no_data(filter));
    }
    rows.sort_by(by_value_asc);

    let series = BarSeries {
        name: "Average SDO".to_string(),
        labels: rows.iter().map(|row| row.key().to_string()).collect(),
        values: rows.iter().map(|row| row.value).collect(),
        color: None,
        hover: rows
            .iter()
            .map(|row| format!("Vendors with SDO: {}", row.count))
            .collect(),
    };

    ChartSpec::new(
        ChartId::AvgSdoByCategory,
        title,
        550,
        ChartBody::Bar(BarChart {
            orientation: Orientation::Horizontal,
            grouped: false,
            value_format: ValueFormat::PercentDetailed,
            value_title: "Average SDO %".to_string(),
            label_title: String::new(),
            color_scale: Some("Viridis".to_string()),
            label_order: Vec::new(),
            series: vec![series],
        }),
    )
}

/// Box per category with at least `min_box_rows` positive commitments.
#[must_use]
pub fn sdo_distribution(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "SDO Commitment Distribution & Outliers by Category";
    let records = dashboard.records(filter);
    let min_rows = dashboard.config().min_box_rows;

    let groups: Vec<BoxGroup> = group_values(
        with_sdo(records.iter()),
        &[GroupKey::CategoryLabel],
        ValueColumn::SdoCapped,
    )
    .into_iter()
    .filter(|group| group.values.len() >= min_rows)
    .map(|group| BoxGroup {
        name: group.keys.join(" / "),
        outliers: stats::iqr_outliers(&group.values).len(),
        values: group.values,
    })
    .collect();
    if groups.is_empty() {
        return ChartSpec::empty(
            ChartId::SdoDistribution,
            title,
            500,
            format!("No category has {min_rows} or more SDO commitments"),
        );
    }

    ChartSpec::new(
        ChartId::SdoDistribution,
        title,
        500,
        ChartBody::Box(BoxChart {
            groups,
            value_title: "SDO Commitment %".to_string(),
            value_format: ValueFormat::Percent,
        }),
    )
}

/// Distinct vendors against mean capped SDO per category, with a fitted trend
/// line once there are more than two categories.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vendors_vs_sdo(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Vendor Count vs Average SDO Commitment";
    let records = dashboard.records(filter);

    let vendors: BTreeMap<String, f64> = group_count_distinct(
        with_sdo(records.iter()),
        &[GroupKey::Category],
        GroupKey::VendorKey,
    )
    .into_iter()
    .map(|row| (row.key().to_string(), row.value))
    .collect();
    let means = group_mean(
        with_sdo(records.iter()),
        &[GroupKey::Category],
        ValueColumn::SdoCapped,
    );

    let points: Vec<ScatterPoint> = means
        .iter()
        .filter_map(|row| {
            let count = *vendors.get(row.key())?;
            Some(ScatterPoint {
                label: row.key().to_string(),
                x: count,
                y: row.value,
                size: count,
            })
        })
        .collect();
    if points.is_empty() {
        return ChartSpec::empty(ChartId::VendorsVsSdo, title, 500, no_data(filter));
    }

    let trend = if points.len() > 2 {
        trend_line(&points)
    } else {
        None
    };

    ChartSpec::new(
        ChartId::VendorsVsSdo,
        title,
        500,
        ChartBody::Scatter(ScatterChart {
            points,
            trend,
            x_title: "Number of Unique Vendors".to_string(),
            y_title: "Average SDO %".to_string(),
            y_format: ValueFormat::Percent,
            color_scale: "Viridis".to_string(),
        }),
    )
}

#[allow(clippy::cast_precision_loss)]
fn trend_line(points: &[ScatterPoint]) -> Option<TrendLine> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let fit = stats::linear_regression(&xs, &ys)?;

    let low = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let high = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (high - low) / (TREND_POINTS - 1) as f64;
    let x: Vec<f64> = (0..TREND_POINTS)
        .map(|index| (index as f64).mul_add(step, low))
        .collect();
    let y = x.iter().map(|value| fit.predict(*value)).collect();

    Some(TrendLine {
        name: format!("Trend (r={:.2})", fit.r),
        x,
        y,
        r: fit.r,
    })
}

/// Equal-width bins over every positive capped commitment.
#[must_use]
pub fn sdo_histogram(dashboard: &Dashboard, filter: &RecordFilter) -> ChartSpec {
    let title = "Overall SDO Commitment Distribution (All Categories)";
    let records = dashboard.records(filter);

    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.contract.sdo_capped())
        .collect();
    let bins: Vec<HistogramBin> = stats::histogram(&values, dashboard.config().histogram_bins)
        .into_iter()
        .map(|bin| HistogramBin {
            start: bin.start,
            end: bin.end,
            count: bin.count,
        })
        .collect();
    if bins.is_empty() {
        return ChartSpec::empty(ChartId::SdoHistogram, title, 400, no_data(filter));
    }

    ChartSpec::new(
        ChartId::SdoHistogram,
        title,
        400,
        ChartBody::Histogram(HistogramChart {
            bins,
            x_title: "SDO Commitment %".to_string(),
            y_title: "Number of Vendors".to_string(),
            x_format: ValueFormat::Percent,
        }),
    )
}
