use serde::{Deserialize, Serialize};

use crate::enums::ProcurementCategory;

/// One row of the contracts workbook: a vendor contact on a statewide contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorContract {
    /// Vendor name as written, whitespace-cleaned.
    pub vendor: String,
    /// Case- and whitespace-folded vendor name used for joining.
    pub vendor_key: String,
    pub category: ProcurementCategory,
    pub contract_code: Option<String>,
    /// Contract amount; `None` when the cell was blank or unparseable.
    pub amount: Option<f64>,
    /// SDO commitment as a fraction (0.15 = 15%).
    pub sdo_pct: Option<f64>,
    pub fiscal_year: Option<i32>,
    pub contact_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl VendorContract {
    /// Build a contract with only the required fields set.
    #[must_use]
    pub fn new(
        vendor: impl Into<String>,
        vendor_key: impl Into<String>,
        category: ProcurementCategory,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            vendor_key: vendor_key.into(),
            category,
            contract_code: None,
            amount: None,
            sdo_pct: None,
            fiscal_year: None,
            contact_name: None,
            role: None,
            email: None,
            phone: None,
        }
    }

    /// SDO commitment for charting: present, strictly positive, clipped to 1.0.
    #[must_use]
    pub fn sdo_capped(&self) -> Option<f64> {
        self.sdo_pct
            .filter(|pct| pct.is_finite() && *pct > 0.0)
            .map(|pct| pct.min(1.0))
    }

    /// Whether the SDO cell held a number at all (zero included).
    #[must_use]
    pub const fn has_sdo(&self) -> bool {
        self.sdo_pct.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdo_capped_clips_and_drops_non_positive() {
        let mut row = VendorContract::new("Acme", "acme", ProcurementCategory::Ite);
        assert_eq!(row.sdo_capped(), None);

        row.sdo_pct = Some(0.0);
        assert_eq!(row.sdo_capped(), None);
        assert!(row.has_sdo());

        row.sdo_pct = Some(0.25);
        assert_eq!(row.sdo_capped(), Some(0.25));

        row.sdo_pct = Some(3.5);
        assert_eq!(row.sdo_capped(), Some(1.0));

        row.sdo_pct = Some(f64::NAN);
        assert_eq!(row.sdo_capped(), None);
    }
}
