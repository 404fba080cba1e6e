//! The dashboard HTML page.
//!
//! One template serves both modes. The live page fetches tab payloads from
//! `/api/tabs/{tab}`; the static page carries every payload inline, including
//! one IT Sector payload per filter value, and needs no server.

use std::collections::BTreeMap;

use cb_charts::{Dashboard, TabFigures, kpi_summary, tab_charts, theme};
use cb_core::responses::KpiSummary;
use cb_core::{ItSector, TabId};
use cb_frame::RecordFilter;

use crate::error::ServerError;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>MA Open Checkbook Dashboard</title>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
<script src="@PLOTLY@"></script>
<style>
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: @BG@; color: @TEXT@; font-family: @FONT@; padding-bottom: 40px; }
.container { max-width: 1400px; margin: 0 auto; }
header { display: flex; justify-content: space-between; align-items: center; padding: 20px 32px; border-bottom: 1px solid @BORDER@; }
h1 { font-size: 28px; font-weight: 700; background: linear-gradient(135deg, @ACCENT@, @ACCENT2@); -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
.subtitle { color: @MUTED@; font-size: 14px; margin-top: 4px; }
.kpi-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; padding: 24px 32px; }
.kpi-card { background: @CARD@; border-radius: 12px; padding: 24px; border: 1px solid @BORDER@; text-align: center; }
.kpi-title { color: @MUTED@; font-size: 13px; text-transform: uppercase; letter-spacing: 1px; font-weight: 500; margin-bottom: 8px; }
.kpi-value { font-size: 32px; font-weight: 700; margin-bottom: 4px; }
.kpi-sub { color: @MUTED@; font-size: 12px; }
.tabs { display: flex; padding: 0 32px; border-bottom: 1px solid @BORDER@; margin-bottom: 24px; }
.tab-btn { background: transparent; color: @MUTED@; border: none; padding: 16px 24px; font-size: 14px; font-weight: 500; text-transform: uppercase; letter-spacing: 0.5px; cursor: pointer; border-bottom: 3px solid transparent; }
.tab-btn:hover { color: @TEXT@; }
.tab-btn.active { color: @ACCENT@; border-bottom: 3px solid @ACCENT@; }
.tab-content { display: none; padding: 0 32px; }
.tab-content.active { display: block; }
.chart-card { background: @CARD@; border-radius: 12px; padding: 16px; border: 1px solid @BORDER@; margin-bottom: 20px; }
.controls { display: flex; align-items: center; margin: 10px 0 20px; }
label { color: @MUTED@; font-size: 13px; font-weight: 500; margin-right: 12px; }
select { background: @CARD@; color: @TEXT@; border: 1px solid @BORDER@; padding: 8px 12px; border-radius: 8px; font-size: 14px; width: 300px; }
.error { color: @ACCENT3@; padding: 16px; }
</style>
</head>
<body>
<div class="container">
<header>
<div>
<h1>Massachusetts Open Checkbook</h1>
<div class="subtitle">Vendor Contract &amp; SDO Commitment Analysis Dashboard</div>
</div>
</header>
<div class="kpi-row">
@KPIS@
</div>
<nav class="tabs">
@TAB_BUTTONS@
</nav>
@TAB_PANES@
</div>
<script>
const EMBEDDED = @EMBEDDED@;
const state = { tab: "@FIRST_TAB@", filter: "all" };

async function payload(tab, filter) {
  if (EMBEDDED) {
    const variants = EMBEDDED[tab];
    return variants[filter] || variants.all;
  }
  const response = await fetch(`/api/tabs/${tab}?filter=${encodeURIComponent(filter)}`);
  if (!response.ok) {
    throw new Error((await response.json()).error);
  }
  return response.json();
}

async function render(tab) {
  const pane = document.getElementById(`charts-${tab}`);
  try {
    const figures = await payload(tab, tab === "it-sector" ? state.filter : "all");
    pane.innerHTML = "";
    for (const chart of figures.charts) {
      const card = document.createElement("div");
      card.className = "chart-card";
      card.id = `chart-${chart.id}`;
      pane.appendChild(card);
      Plotly.newPlot(card, chart.figure.data, chart.figure.layout, { responsive: true, displaylogo: false });
    }
  } catch (error) {
    pane.innerHTML = `<div class="error">${error.message}</div>`;
  }
}

function openTab(tab) {
  state.tab = tab;
  for (const pane of document.getElementsByClassName("tab-content")) {
    pane.classList.toggle("active", pane.id === `tab-${tab}`);
  }
  for (const button of document.getElementsByClassName("tab-btn")) {
    button.classList.toggle("active", button.dataset.tab === tab);
  }
  render(tab);
}

function updateFilter(value) {
  state.filter = value;
  render("it-sector");
}

openTab(state.tab);
</script>
</body>
</html>
"#;

/// The page served at `/`; charts are fetched per tab.
#[must_use]
pub fn render_live(dashboard: &Dashboard) -> String {
    render(dashboard, "null")
}

/// The self-contained export page with every tab payload inline.
///
/// # Errors
///
/// Returns [`ServerError::Encode`] if a payload fails to serialize.
pub fn render_static(dashboard: &Dashboard) -> Result<String, ServerError> {
    let mut embedded: BTreeMap<&str, BTreeMap<&str, TabFigures>> = BTreeMap::new();
    for tab in TabId::ALL {
        let variants = embedded.entry(tab.as_str()).or_default();
        variants.insert("all", tab_charts(dashboard, tab, &RecordFilter::All));
        if tab == TabId::ItSector {
            for sector in ItSector::ALL {
                let filter = RecordFilter::ItSector(sector);
                variants.insert(sector.as_str(), tab_charts(dashboard, tab, &filter));
            }
        }
    }
    let json = serde_json::to_string(&embedded)?;
    Ok(render(dashboard, &script_safe(&json)))
}

fn render(dashboard: &Dashboard, embedded: &str) -> String {
    let replacements = [
        ("@PLOTLY@", theme::PLOTLY_CDN.to_string()),
        ("@BG@", theme::BG.to_string()),
        ("@CARD@", theme::CARD.to_string()),
        ("@BORDER@", theme::CARD_BORDER.to_string()),
        ("@TEXT@", theme::TEXT.to_string()),
        ("@MUTED@", theme::TEXT_MUTED.to_string()),
        ("@ACCENT@", theme::ACCENT.to_string()),
        ("@ACCENT2@", theme::ACCENT2.to_string()),
        ("@ACCENT3@", theme::ACCENT3.to_string()),
        ("@FONT@", theme::FONT_FAMILY.to_string()),
        ("@KPIS@", kpi_cards(&kpi_summary(dashboard))),
        ("@TAB_BUTTONS@", tab_buttons()),
        ("@TAB_PANES@", tab_panes()),
        ("@FIRST_TAB@", TabId::ItSector.as_str().to_string()),
        ("@EMBEDDED@", embedded.to_string()),
    ];
    replacements
        .iter()
        .fold(TEMPLATE.to_string(), |page, (marker, value)| {
            page.replace(marker, value)
        })
}

fn kpi_cards(kpis: &KpiSummary) -> String {
    let average = kpis
        .average_sdo
        .map_or_else(|| "n/a".to_string(), |value| format!("{:.1}%", value * 100.0));
    let cards = [
        ("Total Vendors", thousands(kpis.total_vendors), "Unique companies", theme::ACCENT),
        ("Average SDO", average, "Commitment percentage", theme::ACCENT2),
        ("Categories", kpis.categories.to_string(), "Procurement categories", theme::ACCENT3),
        ("IT Vendors", thousands(kpis.it_vendors), "ITE + ITS + ITT", theme::ACCENT4),
        ("Industries", kpis.industries.to_string(), "Company classifications", theme::AMBER),
    ];

    let mut html = String::new();
    for (title, value, sub, color) in cards {
        html.push_str(&format!(
            "<div class=\"kpi-card\"><div class=\"kpi-title\">{title}</div><div class=\"kpi-value\" style=\"color: {color}\">{value}</div><div class=\"kpi-sub\">{sub}</div></div>\n",
            value = escape(&value),
        ));
    }
    html
}

fn tab_buttons() -> String {
    let mut html = String::new();
    for tab in TabId::ALL {
        html.push_str(&format!(
            "<button class=\"tab-btn\" data-tab=\"{slug}\" onclick=\"openTab('{slug}')\">{title}</button>\n",
            slug = tab.as_str(),
            title = escape(tab.title()),
        ));
    }
    html
}

fn tab_panes() -> String {
    let mut html = String::new();
    for tab in TabId::ALL {
        let slug = tab.as_str();
        html.push_str(&format!(
            "<section id=\"tab-{slug}\" class=\"tab-content\">\n"
        ));
        if tab == TabId::ItSector {
            html.push_str(
                r#"<div class="controls"><label for="it-filter">Filter by IT Sub-Category:</label><select id="it-filter" onchange="updateFilter(this.value)"><option value="all">All IT Categories</option>"#,
            );
            for sector in ItSector::ALL {
                html.push_str(&format!(
                    "<option value=\"{}\">{}</option>",
                    sector.as_str(),
                    escape(sector.category().label()),
                ));
            }
            html.push_str("</select></div>\n");
        }
        html.push_str(&format!("<div id=\"charts-{slug}\"></div></section>\n"));
    }
    html
}

/// `1234567` as `1,234,567`.
fn thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// JSON that cannot open or close markup inside the surrounding `<script>`.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same text.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}
