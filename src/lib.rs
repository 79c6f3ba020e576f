//! Bankview is the view engine behind the transaction screens of a consumer
//! banking app.
//!
//! This library provides two independent engines:
//! - [TransactionFilters] derives the displayed day-grouped transaction list
//!   from the original one by searching, sorting and filtering it.
//! - [Paginator] shows a viewport-sized window over any list of items, paged
//!   or as a rotating carousel.
//!
//! Both engines are synchronous and never fail. Loading data, configuration
//! and the local date are the only fallible parts and report an [Error].

#![warn(missing_docs)]

mod config;
mod error;
mod format;
mod load;
mod logging;
mod pagination;
mod store;
mod table_filters;
mod timezone;
pub mod transaction;

pub use config::{PaginationConfig, ViewConfig};
pub use error::Error;
pub use format::{format_amount, truncate_graphemes};
pub use load::{load_day_groups, parse_transactions_csv, parse_transactions_json};
pub use logging::setup_logging;
pub use pagination::{
    DEFAULT_LARGE_BREAKPOINT_ITEMS_PER_PAGE, PaginationIndicator, PaginationMethod, Paginator,
    ResizeEvent, Viewport, create_pagination_indicators,
};
pub use store::{FilterSnapshot, FilterStore, SharedFilterStore, lock_store};
pub use table_filters::{DirectionFilter, FilterableRecord, GlobalTransactionFilters, TableRow};
pub use timezone::{get_local_offset, today_in};
pub use transaction::{
    DayGroup, FilterSelection, Transaction, TransactionFilters, sort_by_date,
};
