//! Transactions and the transaction filter engine.
//!
//! This module contains everything related to the day-grouped transaction list:
//! - The `Transaction` model and day groups
//! - Sorting, time-window and status filters
//! - The `TransactionFilters` engine and the filter menu state

mod filters;
mod grouping;
mod menu;
mod models;
mod sort;
mod window;

#[cfg(test)]
pub(crate) mod test_utils;

pub use filters::{FilterSelection, StatusFilter, TransactionFilters};
pub use grouping::group_transactions_by_day;
pub use menu::{FilterMenu, FilterMenus};
pub use models::{
    DayGroup, DayTotals, SettlementStatus, Transaction, TransactionDirection, parse_date,
};
pub use sort::{SortDirection, SortOrder, sort_by_amount, sort_by_date};
pub use window::{DateCutoff, DurationWindow};
