//! Plotly figure JSON for a [`ChartSpec`].
//!
//! The browser hands the result straight to `Plotly.newPlot`, so everything
//! the page needs (traces, axis formats, theme) is encoded here.

use serde_json::{Map, Value, json};

use crate::spec::{
    BarChart, BoxChart, ChartBody, ChartSpec, HeatmapChart, HistogramChart, Orientation,
    PieChart, RadarChart, ScatterChart, TreemapChart, ValueFormat,
};
use crate::theme;

impl ValueFormat {
    /// d3 format string for axes and bar labels.
    #[must_use]
    pub const fn d3(self) -> &'static str {
        match self {
            Self::Percent => ".0%",
            Self::PercentDetailed => ".1%",
            Self::Count => ",d",
            Self::Currency => "$,.0f",
        }
    }
}

/// `{data, layout}` for `spec`, themed.
#[must_use]
pub fn figure(spec: &ChartSpec) -> Value {
    let mut layout = base_layout(&spec.title, spec.height);
    let data = match &spec.body {
        ChartBody::Bar(chart) => bar(chart, &mut layout),
        ChartBody::Treemap(chart) => treemap(chart, &mut layout),
        ChartBody::Scatter(chart) => scatter(chart, &mut layout),
        ChartBody::Radar(chart) => radar(chart, &mut layout),
        ChartBody::Box(chart) => box_plot(chart, &mut layout),
        ChartBody::Heatmap(chart) => heatmap(chart),
        ChartBody::Pie(chart) => pie(chart),
        ChartBody::Histogram(chart) => histogram(chart, &mut layout),
        ChartBody::Empty { message } => empty(message, &mut layout),
    };
    json!({ "data": data, "layout": Value::Object(layout) })
}

fn base_layout(title: &str, height: u32) -> Map<String, Value> {
    let layout = json!({
        "template": theme::TEMPLATE,
        "title": { "text": title, "font": { "size": 16, "color": theme::TEXT } },
        "height": height,
        "paper_bgcolor": theme::CARD,
        "plot_bgcolor": theme::CARD,
        "font": { "family": theme::FONT_FAMILY, "color": theme::TEXT },
        "margin": { "l": 60, "r": 30, "t": 60, "b": 60 },
        "legend": { "bgcolor": "rgba(0,0,0,0)", "font": { "color": theme::TEXT_MUTED } },
        "xaxis": { "gridcolor": theme::GRID, "zeroline": false },
        "yaxis": { "gridcolor": theme::GRID, "zeroline": false },
    });
    match layout {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Merge `fields` into the axis object named `axis`.
fn set_axis(layout: &mut Map<String, Value>, axis: &str, fields: Value) {
    let entry = layout
        .entry(axis)
        .or_insert_with(|| Value::Object(Map::new()));
    if let (Value::Object(target), Value::Object(fields)) = (entry, fields) {
        target.extend(fields);
    }
}

fn bar(chart: &BarChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    let horizontal = chart.orientation == Orientation::Horizontal;
    let (value_axis, label_axis, value_ref) = if horizontal {
        ("xaxis", "yaxis", "x")
    } else {
        ("yaxis", "xaxis", "y")
    };
    let format = chart.value_format.d3();

    let traces = chart
        .series
        .iter()
        .map(|series| {
            let marker = series.color.as_ref().map_or_else(
                || {
                    json!({
                        "color": series.values,
                        "colorscale": chart.color_scale.as_deref().unwrap_or("Viridis"),
                        "showscale": false,
                    })
                },
                |color| json!({ "color": color }),
            );
            let mut trace = json!({
                "type": "bar",
                "name": series.name,
                "orientation": if horizontal { "h" } else { "v" },
                "marker": marker,
                "texttemplate": format!("%{{{value_ref}:{format}}}"),
                "textposition": "outside",
            });
            if let Value::Object(map) = &mut trace {
                let (values_key, labels_key) = if horizontal { ("x", "y") } else { ("y", "x") };
                map.insert(values_key.into(), json!(series.values));
                map.insert(labels_key.into(), json!(series.labels));
                if !series.hover.is_empty() {
                    map.insert("customdata".into(), json!(series.hover));
                    map.insert(
                        "hovertemplate".into(),
                        json!(format!(
                            "%{{{}}}<br>%{{{value_ref}:{format}}}<br>%{{customdata}}<extra></extra>",
                            if horizontal { "y" } else { "x" }
                        )),
                    );
                }
            }
            trace
        })
        .collect();

    layout.insert(
        "barmode".into(),
        json!(if chart.grouped { "group" } else { "relative" }),
    );
    layout.insert("showlegend".into(), json!(chart.series.len() > 1));
    set_axis(
        layout,
        value_axis,
        json!({ "title": chart.value_title, "tickformat": format }),
    );
    set_axis(layout, label_axis, json!({ "title": chart.label_title }));
    if !chart.label_order.is_empty() {
        set_axis(
            layout,
            label_axis,
            json!({ "categoryorder": "array", "categoryarray": chart.label_order }),
        );
    }
    traces
}

fn treemap(chart: &TreemapChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    layout.insert("margin".into(), json!({ "l": 10, "r": 10, "t": 60, "b": 10 }));
    vec![json!({
        "type": "treemap",
        "labels": chart.labels,
        "parents": vec![""; chart.labels.len()],
        "values": chart.values,
        "marker": { "colors": chart.values, "colorscale": chart.color_scale },
        "textinfo": "label+value",
    })]
}

fn scatter(chart: &ScatterChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    let max_size = chart
        .points
        .iter()
        .map(|point| point.size)
        .fold(0.0_f64, f64::max);
    let sizes: Vec<f64> = chart
        .points
        .iter()
        .map(|point| {
            if max_size > 0.0 {
                12.0 + point.size / max_size * 28.0
            } else {
                12.0
            }
        })
        .collect();

    let mut traces = vec![json!({
        "type": "scatter",
        "mode": "markers+text",
        "name": "Categories",
        "x": chart.points.iter().map(|p| p.x).collect::<Vec<_>>(),
        "y": chart.points.iter().map(|p| p.y).collect::<Vec<_>>(),
        "text": chart.points.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
        "textposition": "top center",
        "marker": {
            "size": sizes,
            "color": chart.points.iter().map(|p| p.y).collect::<Vec<_>>(),
            "colorscale": chart.color_scale,
            "showscale": false,
        },
    })];
    if let Some(trend) = &chart.trend {
        traces.push(json!({
            "type": "scatter",
            "mode": "lines",
            "name": trend.name,
            "x": trend.x,
            "y": trend.y,
            "line": { "color": theme::AMBER, "dash": "dash", "width": 2 },
        }));
    }

    set_axis(layout, "xaxis", json!({ "title": chart.x_title }));
    set_axis(
        layout,
        "yaxis",
        json!({ "title": chart.y_title, "tickformat": chart.y_format.d3() }),
    );
    traces
}

fn radar(chart: &RadarChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    layout.insert(
        "polar".into(),
        json!({
            "radialaxis": {
                "visible": true,
                "range": [0.0, chart.range_max],
                "gridcolor": theme::GRID,
                "tickfont": { "size": 9, "color": theme::TEXT_MUTED },
            },
            "angularaxis": {
                "gridcolor": theme::GRID,
                "tickfont": { "size": 11, "color": theme::TEXT },
            },
            "bgcolor": theme::CARD,
        }),
    );
    layout.insert("showlegend".into(), json!(true));
    chart
        .series
        .iter()
        .map(|series| {
            json!({
                "type": "scatterpolar",
                "r": series.values,
                "theta": chart.axes,
                "fill": "toself",
                "name": series.name,
                "line": { "color": series.color, "width": 2 },
                "opacity": 0.8,
            })
        })
        .collect()
}

fn box_plot(chart: &BoxChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    layout.insert("showlegend".into(), json!(false));
    set_axis(
        layout,
        "yaxis",
        json!({ "title": chart.value_title, "tickformat": chart.value_format.d3() }),
    );
    chart
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            json!({
                "type": "box",
                "name": group.name,
                "y": group.values,
                "boxpoints": "outliers",
                "marker": { "color": theme::SET2[index % theme::SET2.len()] },
                "hovertemplate": format!(
                    "%{{y:{}}}<br>Outliers: {}<extra>{}</extra>",
                    chart.value_format.d3(),
                    group.outliers,
                    group.name
                ),
            })
        })
        .collect()
}

fn heatmap(chart: &HeatmapChart) -> Vec<Value> {
    vec![json!({
        "type": "heatmap",
        "x": chart.x,
        "y": chart.y,
        "z": chart.z,
        "colorscale": chart.color_scale,
        "texttemplate": "%{z}",
        "hovertemplate": "%{y}<br>%{x}: %{z}<extra></extra>",
    })]
}

fn pie(chart: &PieChart) -> Vec<Value> {
    let colors: Vec<&str> = (0..chart.labels.len())
        .map(|index| theme::SET3[index % theme::SET3.len()])
        .collect();
    vec![json!({
        "type": "pie",
        "labels": chart.labels,
        "values": chart.values,
        "hole": chart.hole,
        "marker": { "colors": colors },
        "textinfo": "percent+label",
        "textposition": "inside",
    })]
}

fn histogram(chart: &HistogramChart, layout: &mut Map<String, Value>) -> Vec<Value> {
    layout.insert("bargap".into(), json!(0.05));
    set_axis(
        layout,
        "xaxis",
        json!({ "title": chart.x_title, "tickformat": chart.x_format.d3() }),
    );
    set_axis(layout, "yaxis", json!({ "title": chart.y_title }));
    vec![json!({
        "type": "bar",
        "name": "Commitments",
        "x": chart.bins.iter().map(|bin| (bin.start + bin.end) / 2.0).collect::<Vec<_>>(),
        "y": chart.bins.iter().map(|bin| bin.count).collect::<Vec<_>>(),
        "width": chart.bins.iter().map(|bin| bin.end - bin.start).collect::<Vec<_>>(),
        "marker": { "color": theme::ACCENT, "line": { "color": theme::CARD, "width": 1 } },
    })]
}

fn empty(message: &str, layout: &mut Map<String, Value>) -> Vec<Value> {
    layout.insert(
        "annotations".into(),
        json!([{
            "text": message,
            "showarrow": false,
            "xref": "paper",
            "yref": "paper",
            "x": 0.5,
            "y": 0.5,
            "font": { "size": 16, "color": theme::TEXT_MUTED },
        }]),
    );
    set_axis(layout, "xaxis", json!({ "visible": false }));
    set_axis(layout, "yaxis", json!({ "visible": false }));
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{BarSeries, HistogramBin};
    use cb_core::ChartId;
    use pretty_assertions::assert_eq;

    fn bar_spec(orientation: Orientation) -> ChartSpec {
        ChartSpec::new(
            ChartId::AvgSdoByCategory,
            "Average SDO",
            550,
            ChartBody::Bar(BarChart {
                orientation,
                grouped: false,
                value_format: ValueFormat::PercentDetailed,
                value_title: "Average SDO %".into(),
                label_title: String::new(),
                color_scale: Some("Viridis".into()),
                label_order: vec!["B".into(), "A".into()],
                series: vec![BarSeries {
                    name: "Average SDO".into(),
                    labels: vec!["A".into(), "B".into()],
                    values: vec![0.1, 0.2],
                    color: None,
                    hover: vec!["one".into(), "two".into()],
                }],
            }),
        )
    }

    #[test]
    fn layout_carries_theme_and_height() {
        let figure = figure(&bar_spec(Orientation::Horizontal));
        let layout = &figure["layout"];
        assert_eq!(layout["height"], 550);
        assert_eq!(layout["template"], "plotly_dark");
        assert_eq!(layout["paper_bgcolor"], theme::CARD);
        assert_eq!(layout["title"]["text"], "Average SDO");
        assert_eq!(layout["xaxis"]["gridcolor"], theme::GRID);
    }

    #[test]
    fn horizontal_bars_put_values_on_x() {
        let figure = figure(&bar_spec(Orientation::Horizontal));
        let trace = &figure["data"][0];
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["x"], json!([0.1, 0.2]));
        assert_eq!(trace["y"], json!(["A", "B"]));
        assert_eq!(trace["texttemplate"], "%{x:.1%}");
        assert_eq!(trace["marker"]["colorscale"], "Viridis");
        assert_eq!(trace["customdata"], json!(["one", "two"]));

        let layout = &figure["layout"];
        assert_eq!(layout["xaxis"]["tickformat"], ".1%");
        assert_eq!(layout["yaxis"]["categoryarray"], json!(["B", "A"]));
    }

    #[test]
    fn vertical_bars_put_values_on_y() {
        let figure = figure(&bar_spec(Orientation::Vertical));
        let trace = &figure["data"][0];
        assert_eq!(trace["orientation"], "v");
        assert_eq!(trace["y"], json!([0.1, 0.2]));
        assert_eq!(figure["layout"]["yaxis"]["title"], "Average SDO %");
    }

    #[test]
    fn empty_chart_hides_axes_and_shows_message() {
        let spec = ChartSpec::empty(ChartId::TopItCompanies, "Top", 550, "No data for Telecom");
        let figure = figure(&spec);
        assert_eq!(figure["data"], json!([]));
        assert_eq!(figure["layout"]["annotations"][0]["text"], "No data for Telecom");
        assert_eq!(figure["layout"]["xaxis"]["visible"], false);
        assert_eq!(figure["layout"]["yaxis"]["visible"], false);
    }

    #[test]
    fn histogram_bars_span_their_bins() {
        let spec = ChartSpec::new(
            ChartId::SdoHistogram,
            "Histogram",
            400,
            ChartBody::Histogram(HistogramChart {
                bins: vec![
                    HistogramBin { start: 0.0, end: 0.5, count: 2 },
                    HistogramBin { start: 0.5, end: 1.0, count: 1 },
                ],
                x_title: "SDO".into(),
                y_title: "Vendors".into(),
                x_format: ValueFormat::Percent,
            }),
        );
        let figure = figure(&spec);
        let trace = &figure["data"][0];
        assert_eq!(trace["x"], json!([0.25, 0.75]));
        assert_eq!(trace["width"], json!([0.5, 0.5]));
        assert_eq!(trace["y"], json!([2, 1]));
        assert_eq!(figure["layout"]["bargap"], 0.05);
    }

    #[test]
    fn pie_is_a_donut_with_qualitative_colours() {
        let spec = ChartSpec::new(
            ChartId::ItConcentration,
            "Concentration",
            500,
            ChartBody::Pie(PieChart {
                labels: vec!["Acme".into(), "Other (2 companies)".into()],
                values: vec![2.0, 4.0],
                hole: 0.5,
            }),
        );
        let figure = figure(&spec);
        let trace = &figure["data"][0];
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["hole"], 0.5);
        assert_eq!(trace["marker"]["colors"][0], theme::SET3[0]);
    }
}
