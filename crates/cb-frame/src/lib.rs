//! # cb-frame
//!
//! The joiner/aggregator stage: a left join of contracts onto categorized
//! companies, groupwise aggregates producing [`cb_core::AggregateRow`]s,
//! record filters, and the small statistics the charts need.
//!
//! Every function here is pure. Filtering returns a new [`JoinedTable`].

pub mod filter;
pub mod group;
pub mod industry;
pub mod join;
pub mod stats;

pub use filter::RecordFilter;
pub use group::{
    GroupKey, GroupValues, ValueColumn, distinct, group_count, group_count_distinct, group_max,
    group_mean, group_median, group_sum, group_values,
};
pub use join::{JoinedTable, left_join};
