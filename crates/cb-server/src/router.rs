//! Request routing, independent of the socket.
//!
//! | Path | Response |
//! |---|---|
//! | `GET /` | dashboard page |
//! | `GET /api/kpis` | [`KpiSummary`](cb_core::responses::KpiSummary) |
//! | `GET /api/tabs/{tab}?filter=` | [`TabFigures`] |
//! | `GET /api/charts/{chart}?filter=` | [`ChartFigure`](cb_charts::ChartFigure) |
//!
//! Unknown paths answer 404, other methods 405, bad filters 400. Error
//! bodies are `{"error": "..."}`.

use std::sync::Arc;

use cb_charts::{Dashboard, TabFigures, chart_figure, kpi_summary, tab_charts};
use cb_core::{ChartId, CoreError, ItSector, TabId};
use cb_frame::RecordFilter;
use serde::Serialize;

use crate::page;

pub const HTML: &str = "text/html; charset=utf-8";
pub const JSON: &str = "application/json";

/// A response ready to write to the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    /// Extra headers beyond `Content-Type`.
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl Response {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            headers: Vec::new(),
            body,
        }
    }

    fn json<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status: 200,
                content_type: JSON,
                headers: Vec::new(),
                body,
            },
            Err(error) => Self::error(500, &format!("Failed to encode response: {error}")),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            headers: Vec::new(),
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

/// Routes requests against one loaded [`Dashboard`].
#[derive(Debug, Clone)]
pub struct Router {
    dashboard: Arc<Dashboard>,
    page: String,
}

impl Router {
    /// Render the live page once; it only depends on the loaded data.
    #[must_use]
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let page = page::render_live(&dashboard);
        Self { dashboard, page }
    }

    #[must_use]
    pub fn handle(&self, method: &str, url: &str) -> Response {
        if !method.eq_ignore_ascii_case("GET") {
            let mut response = Response::error(405, &format!("Method {method} not allowed"));
            response.headers.push(("Allow", "GET"));
            return response;
        }

        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path.split('/').collect::<Vec<_>>().as_slice() {
            ["", ""] => Response::html(self.page.clone()),
            ["", "api", "kpis"] => Response::json(&kpi_summary(&self.dashboard)),
            ["", "api", "tabs", tab] => match (TabId::parse(tab), filter(query)) {
                (Err(error), _) => Response::error(404, &error.to_string()),
                (_, Err(response)) => response,
                (Ok(tab), Ok(filter)) => {
                    let figures: TabFigures = tab_charts(&self.dashboard, tab, &filter);
                    Response::json(&figures)
                }
            },
            ["", "api", "charts", chart] => match (ChartId::parse(chart), filter(query)) {
                (Err(error), _) => Response::error(404, &error.to_string()),
                (_, Err(response)) => response,
                (Ok(chart), Ok(filter)) => {
                    Response::json(&chart_figure(&self.dashboard, chart, &filter))
                }
            },
            _ => Response::error(404, &format!("Not found: {path}")),
        }
    }
}

/// The `filter` query parameter; absent means all.
fn filter(query: &str) -> Result<RecordFilter, Response> {
    let Some(raw) = query_param(query, "filter")? else {
        return Ok(RecordFilter::All);
    };
    ItSector::parse_filter(&raw)
        .map(RecordFilter::from_sector)
        .map_err(|error: CoreError| Response::error(400, &error.to_string()))
}

fn query_param(query: &str, name: &str) -> Result<Option<String>, Response> {
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            let value = value.replace('+', " ");
            return urlencoding::decode(&value)
                .map(|decoded| Some(decoded.into_owned()))
                .map_err(|error| Response::error(400, &format!("Invalid query string: {error}")));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::dashboard;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::Value;

    fn router() -> Router {
        Router::new(Arc::new(dashboard()))
    }

    fn body(response: &Response) -> Value {
        serde_json::from_str(&response.body).expect("JSON body")
    }

    #[test]
    fn root_serves_page() {
        let response = router().handle("GET", "/");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, HTML);
        assert!(response.body.contains("Massachusetts Open Checkbook"));
    }

    #[test]
    fn kpis_are_json() {
        let response = router().handle("GET", "/api/kpis");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, JSON);
        assert_eq!(body(&response)["total_vendors"], 3);
    }

    #[rstest]
    #[case("/api/tabs/it-sector", "All")]
    #[case("/api/tabs/it-sector?filter=hardware", "Hardware")]
    #[case("/api/tabs/it-sector?filter=Software", "Software")]
    #[case("/api/tabs/it-sector?filter=%20telecom", "Telecom")]
    #[case("/api/tabs/it-sector/?filter=all", "All")]
    fn tab_filters(#[case] url: &str, #[case] label: &str) {
        let response = router().handle("GET", url);
        assert_eq!(response.status, 200, "{}", response.body);
        let payload = body(&response);
        assert_eq!(payload["filter"], label);
        assert_eq!(payload["charts"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn single_chart() {
        let response = router().handle("GET", "/api/charts/top_it_companies?filter=telecom");
        assert_eq!(response.status, 200);
        let payload = body(&response);
        assert_eq!(payload["id"], "top_it_companies");
        assert_eq!(payload["empty"], true);
    }

    #[rstest]
    #[case("/api/tabs/it-sector?filter=quantum", 400)]
    #[case("/api/charts/it_radar?filter=%FF", 400)]
    #[case("/api/tabs/finance", 404)]
    #[case("/api/charts/pie_of_pies", 404)]
    #[case("/favicon.ico", 404)]
    #[case("/api", 404)]
    fn errors_are_json(#[case] url: &str, #[case] status: u16) {
        let response = router().handle("GET", url);
        assert_eq!(response.status, status);
        assert_eq!(response.content_type, JSON);
        assert!(body(&response)["error"].is_string());
    }

    #[test]
    fn non_get_is_rejected() {
        let response = router().handle("POST", "/api/kpis");
        assert_eq!(response.status, 405);
        assert_eq!(response.headers, vec![("Allow", "GET")]);
    }
}
