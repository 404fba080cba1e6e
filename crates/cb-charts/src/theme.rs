//! Dark dashboard palette shared by figures and the HTML page.

pub const BG: &str = "#0F172A";
pub const CARD: &str = "#1E293B";
pub const CARD_BORDER: &str = "#334155";
pub const ACCENT: &str = "#06B6D4";
pub const ACCENT2: &str = "#8B5CF6";
pub const ACCENT3: &str = "#F43F5E";
pub const ACCENT4: &str = "#10B981";
pub const AMBER: &str = "#F59E0B";
pub const TEXT: &str = "#F1F5F9";
pub const TEXT_MUTED: &str = "#94A3B8";
pub const GRID: &str = "#334155";

pub const TEMPLATE: &str = "plotly_dark";
pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Plotly build loaded by the page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Series colours for up to three categorical series.
pub const SERIES: [&str; 3] = [ACCENT, ACCENT2, ACCENT3];

/// Plotly's qualitative `Set2`.
pub const SET2: [&str; 8] = [
    "rgb(102,194,165)",
    "rgb(252,141,98)",
    "rgb(141,160,203)",
    "rgb(231,138,195)",
    "rgb(166,216,84)",
    "rgb(255,217,47)",
    "rgb(229,196,148)",
    "rgb(179,179,179)",
];

/// Plotly's qualitative `Set3`.
pub const SET3: [&str; 12] = [
    "rgb(141,211,199)",
    "rgb(255,255,179)",
    "rgb(190,186,218)",
    "rgb(251,128,114)",
    "rgb(128,177,211)",
    "rgb(253,180,98)",
    "rgb(179,222,105)",
    "rgb(252,205,229)",
    "rgb(217,217,217)",
    "rgb(188,128,189)",
    "rgb(204,235,197)",
    "rgb(255,237,111)",
];

/// Colour for the `index`th categorical series, cycling.
#[must_use]
pub fn series_color(index: usize) -> &'static str {
    SERIES[index % SERIES.len()]
}
