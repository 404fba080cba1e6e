use serde::{Deserialize, Serialize};

use super::{VendorCategory, VendorContract};

/// A contract row with its matched category row, if the vendor was categorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub contract: VendorContract,
    pub category: Option<VendorCategory>,
}

impl JoinedRecord {
    #[must_use]
    pub const fn new(contract: VendorContract, category: Option<VendorCategory>) -> Self {
        Self { contract, category }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.category.is_some()
    }

    /// Sub-category of the matched category row; `None` for unmatched contracts.
    #[must_use]
    pub fn sub_category(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.sub_category.as_str())
    }
}
