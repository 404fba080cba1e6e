use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Designation;

/// SDO designation flags for a categorized company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DesignationFlags {
    pub national_and_local: bool,
    pub local: bool,
    pub sgc_target: bool,
}

impl DesignationFlags {
    #[must_use]
    pub const fn contains(self, designation: Designation) -> bool {
        match designation {
            Designation::NationalAndLocal => self.national_and_local,
            Designation::Local => self.local,
            Designation::SgcTarget => self.sgc_target,
        }
    }

    pub const fn insert(&mut self, designation: Designation) {
        match designation {
            Designation::NationalAndLocal => self.national_and_local = true,
            Designation::Local => self.local = true,
            Designation::SgcTarget => self.sgc_target = true,
        }
    }

    #[must_use]
    pub fn with(mut self, designation: Designation) -> Self {
        self.insert(designation);
        self
    }

    /// Set designations in workbook column order.
    #[must_use]
    pub fn iter(self) -> impl Iterator<Item = Designation> {
        Designation::ALL
            .into_iter()
            .filter(move |designation| self.contains(*designation))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.national_and_local || self.local || self.sgc_target)
    }
}

/// One company from the categorized-companies workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCategory {
    pub vendor: String,
    /// Case- and whitespace-folded vendor name used for joining.
    pub vendor_key: String,
    /// Industry label (sheet name in the source workbook), e.g. `Hardware`.
    pub sub_category: String,
    pub designations: DesignationFlags,
}

impl VendorCategory {
    #[must_use]
    pub fn new(
        vendor: impl Into<String>,
        vendor_key: impl Into<String>,
        sub_category: impl Into<String>,
        designations: DesignationFlags,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            vendor_key: vendor_key.into(),
            sub_category: sub_category.into(),
            designations,
        }
    }
}
