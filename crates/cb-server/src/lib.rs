//! # cb-server
//!
//! The dashboard shell: a single-page HTML dashboard served over `tiny_http`,
//! JSON endpoints for KPIs and chart figures, and a static export of the same
//! page with every figure embedded.

pub mod error;
pub mod export;
pub mod page;
pub mod router;
pub mod server;

pub use error::ServerError;
pub use export::export_static;
pub use router::{Response, Router};
pub use server::{DashboardServer, StopHandle};

#[cfg(test)]
pub(crate) mod fixtures {
    use cb_charts::Dashboard;
    use cb_config::ChartsConfig;
    use cb_core::{Designation, DesignationFlags, ProcurementCategory, VendorCategory, VendorContract};

    fn contract(vendor: &str, category: ProcurementCategory, sdo: Option<f64>) -> VendorContract {
        let code = format!("{}1", category.code());
        let mut row = VendorContract::new(vendor, vendor.to_lowercase(), category);
        row.contract_code = Some(code);
        row.sdo_pct = sdo;
        row.amount = Some(100.0);
        row
    }

    pub fn dashboard() -> Dashboard {
        let contracts = vec![
            contract("Acme", ProcurementCategory::Ite, Some(0.25)),
            contract("Globex", ProcurementCategory::Its, Some(0.1)),
            contract("Initech", ProcurementCategory::Med, None),
        ];
        let companies = vec![VendorCategory::new(
            "Acme",
            "acme",
            "Hardware",
            DesignationFlags::default().with(Designation::Local),
        )];
        Dashboard::from_rows(contracts, companies, ChartsConfig::default())
    }
}
