//! Typed rows for the dashboard pipeline.
//!
//! Rows are built once by `cb-ingest` at the normalizer boundary and never
//! mutated afterwards. Nothing downstream sees spreadsheet cells.

mod aggregate;
mod category;
mod contract;
mod joined;

pub use aggregate::AggregateRow;
pub use category::{DesignationFlags, VendorCategory};
pub use contract::VendorContract;
pub use joined::JoinedRecord;
