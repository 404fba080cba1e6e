//! # cb-core
//!
//! Core types shared across all checkbook crates.
//!
//! - Typed rows for the two spreadsheet inputs and their left join
//! - Procurement category, IT sector, and designation enums
//! - Tab and chart identifiers used by the dashboard surface
//! - Cross-cutting error types
//! - JSON response payloads (KPIs, load reports, category summaries)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use entities::{AggregateRow, DesignationFlags, JoinedRecord, VendorCategory, VendorContract};
pub use enums::{ChartId, Designation, ItSector, ProcurementCategory, TabId};
pub use errors::CoreError;
