//! Tab composition: the figure payloads the page asks for.

use cb_core::{ChartId, TabId};
use cb_frame::RecordFilter;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::builders;
use crate::dashboard::Dashboard;
use crate::plotly;

/// One chart ready for `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartFigure {
    pub id: ChartId,
    pub title: String,
    /// Whether the IT sector select changes this chart.
    pub filterable: bool,
    /// True when the chart shows a no-data message.
    pub empty: bool,
    /// Plotly `{data, layout}`.
    pub figure: Value,
}

/// Every chart on one tab, in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TabFigures {
    pub tab: TabId,
    pub title: String,
    /// Label of the filter the filterable charts were built with.
    pub filter: String,
    pub charts: Vec<ChartFigure>,
}

/// Build and encode one chart.
#[must_use]
pub fn chart_figure(dashboard: &Dashboard, chart: ChartId, filter: &RecordFilter) -> ChartFigure {
    let spec = builders::build(dashboard, chart, filter);
    ChartFigure {
        id: chart,
        filterable: chart.is_filterable(),
        empty: spec.is_empty(),
        figure: plotly::figure(&spec),
        title: spec.title,
    }
}

/// Build and encode every chart on `tab`.
#[must_use]
pub fn tab_charts(dashboard: &Dashboard, tab: TabId, filter: &RecordFilter) -> TabFigures {
    let charts: Vec<ChartFigure> = tab
        .charts()
        .iter()
        .map(|chart| chart_figure(dashboard, *chart, filter))
        .collect();
    debug!(
        tab = tab.as_str(),
        filter = %filter.label(),
        charts = charts.len(),
        empty = charts.iter().filter(|chart| chart.empty).count(),
        "built tab"
    );
    TabFigures {
        tab,
        title: tab.title().to_string(),
        filter: filter.label(),
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures;
    use cb_core::ItSector;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_tab_builds_its_charts_in_order() {
        let dashboard = fixtures::dashboard();
        for tab in TabId::ALL {
            let figures = tab_charts(&dashboard, tab, &RecordFilter::All);
            let ids: Vec<ChartId> = figures.charts.iter().map(|c| c.id).collect();
            assert_eq!(ids, tab.charts().to_vec());
            for chart in &figures.charts {
                assert!(chart.figure["data"].is_array());
                assert!(chart.figure["layout"].is_object());
            }
        }
    }

    #[test]
    fn filter_reaches_only_filterable_charts() {
        let dashboard = fixtures::dashboard();
        let filter = RecordFilter::ItSector(ItSector::Telecom);
        let figures = tab_charts(&dashboard, TabId::ItSector, &filter);
        assert_eq!(figures.filter, "Telecom");

        let top = &figures.charts[0];
        assert!(top.filterable);
        assert!(top.empty, "no telecom row carries a positive commitment");

        let unfiltered = chart_figure(&dashboard, ChartId::ItConcentration, &RecordFilter::All);
        assert_eq!(figures.charts[1], unfiltered);
    }
}
