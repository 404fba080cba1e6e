use cb_core::{ItSector, JoinedRecord};

/// Row predicate applied to joined records before re-aggregating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordFilter {
    #[default]
    All,
    /// Contracts in the procurement category of one IT sector.
    ItSector(ItSector),
}

impl RecordFilter {
    /// `None` (the dashboard's "All") maps to [`RecordFilter::All`].
    #[must_use]
    pub const fn from_sector(sector: Option<ItSector>) -> Self {
        match sector {
            Some(sector) => Self::ItSector(sector),
            None => Self::All,
        }
    }

    #[must_use]
    pub fn matches(&self, record: &JoinedRecord) -> bool {
        match self {
            Self::All => true,
            Self::ItSector(sector) => record.contract.category.it_sector() == Some(*sector),
        }
    }

    /// Short label for logs and chart subtitles.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::ItSector(sector) => sector.title().to_string(),
        }
    }
}
