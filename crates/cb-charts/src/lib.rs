//! # cb-charts
//!
//! Chart builders and figure encoding for the checkbook dashboard.
//!
//! - [`Dashboard`]: the immutable joined data every builder reads
//! - [`builders`]: one pure function per chart, returning a [`ChartSpec`]
//! - [`plotly`]: `ChartSpec` to Plotly `{data, layout}` JSON
//! - [`tabs`]: the per-tab and per-chart payloads served to the page
//! - [`kpi`]: headline numbers and per-category statistics

pub mod builders;
pub mod dashboard;
pub mod kpi;
pub mod plotly;
pub mod spec;
pub mod tabs;
pub mod theme;

pub use builders::build;
pub use dashboard::Dashboard;
pub use kpi::{category_summaries, kpi_summary};
pub use spec::{ChartBody, ChartSpec};
pub use tabs::{ChartFigure, TabFigures, chart_figure, tab_charts};
