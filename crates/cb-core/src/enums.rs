//! Procurement categories, IT sectors, designations, and dashboard identifiers.
//!
//! Unit enums serialize as `snake_case`. `ProcurementCategory` keeps unknown
//! codes verbatim so a new sheet in the contracts workbook never fails a load.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ProcurementCategory
// ---------------------------------------------------------------------------

/// Statewide procurement category, identified by its three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProcurementCategory {
    Ite,
    Its,
    Itt,
    Fac,
    Veh,
    Gro,
    Lnd,
    Med,
    Mro,
    Off,
    Prf,
    Pse,
    Sfc,
    Trd,
    Wmr,
    /// A code outside the known set, kept as written (trimmed, upper-cased).
    Other(String),
}

impl ProcurementCategory {
    /// Every known category, in the order the source workbook lists them.
    #[must_use]
    pub fn known() -> [Self; 15] {
        [
            Self::Ite,
            Self::Its,
            Self::Itt,
            Self::Fac,
            Self::Veh,
            Self::Gro,
            Self::Lnd,
            Self::Med,
            Self::Mro,
            Self::Off,
            Self::Prf,
            Self::Pse,
            Self::Sfc,
            Self::Trd,
            Self::Wmr,
        ]
    }

    /// Parse a category code or sheet name. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_ascii_uppercase();
        match code.as_str() {
            "ITE" => Self::Ite,
            "ITS" => Self::Its,
            "ITT" => Self::Itt,
            "FAC" => Self::Fac,
            "VEH" => Self::Veh,
            "GRO" => Self::Gro,
            "LND" => Self::Lnd,
            "MED" => Self::Med,
            "MRO" => Self::Mro,
            "OFF" => Self::Off,
            "PRF" => Self::Prf,
            "PSE" => Self::Pse,
            "SFC" => Self::Sfc,
            "TRD" => Self::Trd,
            "WMR" => Self::Wmr,
            _ => Self::Other(code),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Ite => "ITE",
            Self::Its => "ITS",
            Self::Itt => "ITT",
            Self::Fac => "FAC",
            Self::Veh => "VEH",
            Self::Gro => "GRO",
            Self::Lnd => "LND",
            Self::Med => "MED",
            Self::Mro => "MRO",
            Self::Off => "OFF",
            Self::Prf => "PRF",
            Self::Pse => "PSE",
            Self::Sfc => "SFC",
            Self::Trd => "TRD",
            Self::Wmr => "WMR",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label. Unknown codes label themselves.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Ite => "IT Equipment & Services",
            Self::Its => "IT Software & Services",
            Self::Itt => "Telecom & Networking",
            Self::Fac => "Facilities General",
            Self::Veh => "Vehicle Acquisition & Maint.",
            Self::Gro => "Food & Food Service",
            Self::Lnd => "Facility Landscaping",
            Self::Med => "Health & Medical",
            Self::Mro => "Maintenance, Repair & Ops",
            Self::Off => "Office Supplies",
            Self::Prf => "Professional Services",
            Self::Pse => "Public Safety & Security",
            Self::Sfc => "Sustainable Facilities",
            Self::Trd => "Tradespersons",
            Self::Wmr => "Waste Mgmt & Recycling",
            Self::Other(code) => code,
        }
    }

    /// The IT sector this category belongs to, if any.
    #[must_use]
    pub const fn it_sector(&self) -> Option<ItSector> {
        match self {
            Self::Ite => Some(ItSector::Hardware),
            Self::Its => Some(ItSector::Software),
            Self::Itt => Some(ItSector::Telecom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ProcurementCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ProcurementCategory> for String {
    fn from(value: ProcurementCategory) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for ProcurementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// ItSector
// ---------------------------------------------------------------------------

/// The three IT procurement categories, named the way the dashboard filter shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItSector {
    /// `ITE`: IT Equipment & Services.
    Hardware,
    /// `ITS`: IT Software & Services.
    Software,
    /// `ITT`: Telecom & Networking.
    Telecom,
}

impl ItSector {
    pub const ALL: [Self; 3] = [Self::Hardware, Self::Software, Self::Telecom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Telecom => "telecom",
        }
    }

    /// Display name used in filter controls and chart titles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Telecom => "Telecom",
        }
    }

    #[must_use]
    pub const fn category(self) -> ProcurementCategory {
        match self {
            Self::Hardware => ProcurementCategory::Ite,
            Self::Software => ProcurementCategory::Its,
            Self::Telecom => ProcurementCategory::Itt,
        }
    }

    /// Parse a dashboard filter value.
    ///
    /// Accepts the sector name or its category code, case-insensitively.
    /// `all` (or an empty value) means no sector filter and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFilter`] for anything else.
    pub fn parse_filter(raw: &str) -> Result<Option<Self>, CoreError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(None),
            "hardware" | "ite" => Ok(Some(Self::Hardware)),
            "software" | "its" => Ok(Some(Self::Software)),
            "telecom" | "itt" => Ok(Some(Self::Telecom)),
            _ => Err(CoreError::InvalidFilter(raw.to_string())),
        }
    }
}

impl fmt::Display for ItSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Designation
// ---------------------------------------------------------------------------

/// Supplier Diversity Office designation of a categorized company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    NationalAndLocal,
    Local,
    SgcTarget,
}

impl Designation {
    /// Column order of the categorized-companies workbook.
    pub const ALL: [Self; 3] = [Self::NationalAndLocal, Self::Local, Self::SgcTarget];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NationalAndLocal => "national_and_local",
            Self::Local => "local",
            Self::SgcTarget => "sgc_target",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NationalAndLocal => "National & Local",
            Self::Local => "Local",
            Self::SgcTarget => "SGC Target",
        }
    }

    /// Parse a designation from a `type` cell or column header.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "nationallocal" | "nationalandlocal" | "national" => Some(Self::NationalAndLocal),
            "local" | "localcompanies" | "localonly" => Some(Self::Local),
            "sgctarget" | "sgc" => Some(Self::SgcTarget),
            _ => None,
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TabId
// ---------------------------------------------------------------------------

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    ItSector,
    CrossCategory,
    VendorCoverage,
    IndustryAnalysis,
}

impl TabId {
    pub const ALL: [Self; 4] = [
        Self::ItSector,
        Self::CrossCategory,
        Self::VendorCoverage,
        Self::IndustryAnalysis,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItSector => "it-sector",
            Self::CrossCategory => "cross-category",
            Self::VendorCoverage => "vendor-coverage",
            Self::IndustryAnalysis => "industry-analysis",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ItSector => "IT Sector",
            Self::CrossCategory => "Cross-Category",
            Self::VendorCoverage => "Vendor Coverage",
            Self::IndustryAnalysis => "Industry Analysis",
        }
    }

    /// Charts on this tab, in page order.
    #[must_use]
    pub const fn charts(self) -> &'static [ChartId] {
        match self {
            Self::ItSector => &[
                ChartId::TopItCompanies,
                ChartId::ItConcentration,
                ChartId::ItRadar,
            ],
            Self::CrossCategory => &[
                ChartId::AvgSdoByCategory,
                ChartId::SdoDistribution,
                ChartId::VendorsVsSdo,
                ChartId::SdoHistogram,
            ],
            Self::VendorCoverage => &[
                ChartId::SdoCoverage,
                ChartId::VendorTreemap,
                ChartId::ContractCodes,
                ChartId::AmountBySubCategory,
            ],
            Self::IndustryAnalysis => &[
                ChartId::NationalVsLocal,
                ChartId::IndustryHeatmap,
                ChartId::SectorDensity,
            ],
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownTab`] if `raw` is not a tab slug.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == raw)
            .ok_or_else(|| CoreError::UnknownTab(raw.to_string()))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChartId
// ---------------------------------------------------------------------------

/// Every chart the dashboard can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    TopItCompanies,
    ItConcentration,
    ItRadar,
    AvgSdoByCategory,
    SdoDistribution,
    VendorsVsSdo,
    SdoHistogram,
    SdoCoverage,
    VendorTreemap,
    ContractCodes,
    AmountBySubCategory,
    NationalVsLocal,
    IndustryHeatmap,
    SectorDensity,
}

impl ChartId {
    pub const ALL: [Self; 14] = [
        Self::TopItCompanies,
        Self::ItConcentration,
        Self::ItRadar,
        Self::AvgSdoByCategory,
        Self::SdoDistribution,
        Self::VendorsVsSdo,
        Self::SdoHistogram,
        Self::SdoCoverage,
        Self::VendorTreemap,
        Self::ContractCodes,
        Self::AmountBySubCategory,
        Self::NationalVsLocal,
        Self::IndustryHeatmap,
        Self::SectorDensity,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopItCompanies => "top_it_companies",
            Self::ItConcentration => "it_concentration",
            Self::ItRadar => "it_radar",
            Self::AvgSdoByCategory => "avg_sdo_by_category",
            Self::SdoDistribution => "sdo_distribution",
            Self::VendorsVsSdo => "vendors_vs_sdo",
            Self::SdoHistogram => "sdo_histogram",
            Self::SdoCoverage => "sdo_coverage",
            Self::VendorTreemap => "vendor_treemap",
            Self::ContractCodes => "contract_codes",
            Self::AmountBySubCategory => "amount_by_sub_category",
            Self::NationalVsLocal => "national_vs_local",
            Self::IndustryHeatmap => "industry_heatmap",
            Self::SectorDensity => "sector_density",
        }
    }

    /// The tab the chart is placed on.
    #[must_use]
    pub const fn tab(self) -> TabId {
        match self {
            Self::TopItCompanies | Self::ItConcentration | Self::ItRadar => TabId::ItSector,
            Self::AvgSdoByCategory
            | Self::SdoDistribution
            | Self::VendorsVsSdo
            | Self::SdoHistogram => TabId::CrossCategory,
            Self::SdoCoverage
            | Self::VendorTreemap
            | Self::ContractCodes
            | Self::AmountBySubCategory => TabId::VendorCoverage,
            Self::NationalVsLocal | Self::IndustryHeatmap | Self::SectorDensity => {
                TabId::IndustryAnalysis
            }
        }
    }

    /// Whether the IT sector filter changes this chart.
    #[must_use]
    pub const fn is_filterable(self) -> bool {
        matches!(self, Self::TopItCompanies)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownChart`] if `raw` is not a chart slug.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|chart| chart.as_str() == raw)
            .ok_or_else(|| CoreError::UnknownChart(raw.to_string()))
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_roundtrip_through_parse() {
        for category in ProcurementCategory::known() {
            assert_eq!(ProcurementCategory::parse(category.code()), category);
            assert!(category.is_known());
        }
    }

    #[test]
    fn category_parse_trims_and_uppercases() {
        assert_eq!(ProcurementCategory::parse(" ite "), ProcurementCategory::Ite);
        assert_eq!(
            ProcurementCategory::parse("xyz"),
            ProcurementCategory::Other("XYZ".into())
        );
        assert_eq!(ProcurementCategory::parse("xyz").label(), "XYZ");
    }

    #[test]
    fn category_serializes_as_code() {
        let json = serde_json::to_string(&ProcurementCategory::Prf).unwrap();
        assert_eq!(json, "\"PRF\"");
        let parsed: ProcurementCategory = serde_json::from_str("\"itt\"").unwrap();
        assert_eq!(parsed, ProcurementCategory::Itt);
    }

    #[test]
    fn only_it_categories_have_sectors() {
        let sectors: Vec<_> = ProcurementCategory::known()
            .iter()
            .filter_map(ProcurementCategory::it_sector)
            .collect();
        assert_eq!(sectors, ItSector::ALL.to_vec());
        for sector in ItSector::ALL {
            assert_eq!(sector.category().it_sector(), Some(sector));
        }
    }

    #[test]
    fn filter_parsing_accepts_names_and_codes() {
        assert_eq!(ItSector::parse_filter("All").unwrap(), None);
        assert_eq!(ItSector::parse_filter("").unwrap(), None);
        assert_eq!(ItSector::parse_filter("ITE").unwrap(), Some(ItSector::Hardware));
        assert_eq!(ItSector::parse_filter("software").unwrap(), Some(ItSector::Software));
        assert!(matches!(
            ItSector::parse_filter("firmware"),
            Err(CoreError::InvalidFilter(value)) if value == "firmware"
        ));
    }

    #[test]
    fn designation_parses_workbook_headers() {
        assert_eq!(Designation::parse("National & Local"), Some(Designation::NationalAndLocal));
        assert_eq!(Designation::parse("Local Companies"), Some(Designation::Local));
        assert_eq!(Designation::parse("SGC Target"), Some(Designation::SgcTarget));
        assert_eq!(Designation::parse("Regional"), None);
    }

    #[test]
    fn every_chart_appears_on_exactly_its_tab() {
        for chart in ChartId::ALL {
            let owners: Vec<_> = TabId::ALL
                .into_iter()
                .filter(|tab| tab.charts().contains(&chart))
                .collect();
            assert_eq!(owners, vec![chart.tab()], "chart {chart}");
        }
    }

    #[test]
    fn slugs_parse_back() {
        for tab in TabId::ALL {
            assert_eq!(TabId::parse(tab.as_str()).unwrap(), tab);
        }
        for chart in ChartId::ALL {
            assert_eq!(ChartId::parse(chart.as_str()).unwrap(), chart);
        }
        assert!(matches!(TabId::parse("nope"), Err(CoreError::UnknownTab(_))));
        assert!(matches!(ChartId::parse("nope"), Err(CoreError::UnknownChart(_))));
    }
}
