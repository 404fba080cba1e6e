//! Renderer-independent chart specifications.
//!
//! Builders produce a [`ChartSpec`]; [`crate::plotly`] turns it into figure
//! JSON. Keeping the two apart lets tests assert on chart content without
//! reading Plotly trace layouts.

use cb_core::ChartId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: String,
    /// Figure height in pixels.
    pub height: u32,
    pub body: ChartBody,
}

impl ChartSpec {
    #[must_use]
    pub fn new(id: ChartId, title: impl Into<String>, height: u32, body: ChartBody) -> Self {
        Self {
            id,
            title: title.into(),
            height,
            body,
        }
    }

    /// A chart with nothing to plot, showing `message` instead.
    #[must_use]
    pub fn empty(id: ChartId, title: impl Into<String>, height: u32, message: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            height,
            ChartBody::Empty {
                message: message.into(),
            },
        )
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.body, ChartBody::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartBody {
    Bar(BarChart),
    Treemap(TreemapChart),
    Scatter(ScatterChart),
    Radar(RadarChart),
    Box(BoxChart),
    Heatmap(HeatmapChart),
    Pie(PieChart),
    Histogram(HistogramChart),
    Empty { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Categories on the y axis, values along x.
    Horizontal,
    Vertical,
}

/// How values are printed on bars and the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Whole percent, `15%`.
    Percent,
    /// One decimal, `15.2%`.
    PercentDetailed,
    Count,
    Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BarSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fixed colour; `None` colours bars by value on the chart's scale.
    pub color: Option<String>,
    /// Extra hover line per bar; empty for none.
    #[serde(default)]
    pub hover: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BarChart {
    pub orientation: Orientation,
    /// Series side by side rather than stacked.
    pub grouped: bool,
    pub value_format: ValueFormat,
    pub value_title: String,
    pub label_title: String,
    /// Continuous colour scale for series without a fixed colour.
    pub color_scale: Option<String>,
    /// Label order along the category axis; empty keeps trace order.
    #[serde(default)]
    pub label_order: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreemapChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color_scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrendLine {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Pearson correlation of the fitted points.
    pub r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    pub trend: Option<TrendLine>,
    pub x_title: String,
    pub y_title: String,
    pub y_format: ValueFormat,
    pub color_scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RadarSeries {
    pub name: String,
    pub color: String,
    /// One value per axis, with the first repeated at the end.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RadarChart {
    /// Axis names, with the first repeated at the end.
    pub axes: Vec<String>,
    pub series: Vec<RadarSeries>,
    pub range_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoxGroup {
    pub name: String,
    pub values: Vec<f64>,
    /// Values beyond 1.5 IQR of the group's quartiles.
    pub outliers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoxChart {
    pub groups: Vec<BoxGroup>,
    pub value_title: String,
    pub value_format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeatmapChart {
    pub x: Vec<String>,
    pub y: Vec<String>,
    /// Rows follow `y`, columns follow `x`.
    pub z: Vec<Vec<f64>>,
    pub color_scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out; `0.0` for a full pie.
    pub hole: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistogramChart {
    pub bins: Vec<HistogramBin>,
    pub x_title: String,
    pub y_title: String,
    pub x_format: ValueFormat,
}
