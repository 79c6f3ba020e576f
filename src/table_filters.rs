//! Direction and search filters for flat transaction tables.
//!
//! Unlike the day-grouped [TransactionFilters](crate::TransactionFilters),
//! this filter works on a flat list of records and only knows about the
//! direction of money and a search phrase.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionDirection};

/// Which transactions to show by direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DirectionFilter {
    /// Both incoming and outgoing.
    #[default]
    All,
    /// Only money received.
    Incoming,
    /// Only money paid out.
    Outgoing,
}

impl DirectionFilter {
    fn direction(self) -> Option<TransactionDirection> {
        match self {
            Self::All => None,
            Self::Incoming => Some(TransactionDirection::Incoming),
            Self::Outgoing => Some(TransactionDirection::Outgoing),
        }
    }
}

/// A record that can be shown in a filtered transaction table.
pub trait FilterableRecord: Clone {
    /// Which way the money moved.
    fn direction(&self) -> TransactionDirection;

    /// The text searched by the search phrase.
    fn search_text(&self) -> &str;
}

impl FilterableRecord for Transaction {
    fn direction(&self) -> TransactionDirection {
        self.direction
    }

    fn search_text(&self) -> &str {
        &self.title
    }
}

/// A row of the account history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// The calendar date as "YYYY-MM-DD".
    pub date: String,
    /// What the transaction was for.
    pub description: String,
    /// Which way the money moved.
    pub direction: TransactionDirection,
    /// The (non-negative) amount of money moved.
    pub amount: f64,
    /// The currency code of `amount`.
    pub currency: String,
}

impl FilterableRecord for TableRow {
    fn direction(&self) -> TransactionDirection {
        self.direction
    }

    fn search_text(&self) -> &str {
        &self.description
    }
}

impl From<&Transaction> for TableRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.clone(),
            description: transaction.title.clone(),
            direction: transaction.direction,
            amount: transaction.amount,
            currency: transaction.currency.clone(),
        }
    }
}

/// Filters a flat list of records by direction and search phrase.
#[derive(Debug, Clone)]
pub struct GlobalTransactionFilters<R> {
    original: Vec<R>,
    data: Vec<R>,
}

impl<R> Default for GlobalTransactionFilters<R> {
    fn default() -> Self {
        Self {
            original: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl<R: FilterableRecord> GlobalTransactionFilters<R> {
    /// Create a filter showing all of `records`.
    pub fn new(records: Vec<R>) -> Self {
        let mut filters = Self::default();
        filters.set_original(records);
        filters
    }

    /// Replace the original records and show all of them.
    pub fn set_original(&mut self, records: Vec<R>) {
        self.data = records.clone();
        self.original = records;
    }

    /// The records currently shown.
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// Start over from the original records, then filter by direction and
    /// by `phrase`.
    pub fn set_applied_filter(&mut self, filter: DirectionFilter, phrase: &str) {
        self.data = self.original.clone();

        if let Some(direction) = filter.direction() {
            self.data.retain(|record| record.direction() == direction);
        }

        self.data.retain(|record| matches_phrase(record, phrase));

        tracing::debug!(
            "table filter {filter:?} with phrase {phrase:?} shows {} of {} records",
            self.data.len(),
            self.original.len()
        );
    }

    /// Narrow the records currently shown by `phrase`.
    ///
    /// This does not start over from the original records, so the direction
    /// filter stays in effect and repeated calls only ever narrow the result.
    pub fn set_search_phrase(&mut self, phrase: &str) {
        self.data.retain(|record| matches_phrase(record, phrase));
    }
}

fn matches_phrase<R: FilterableRecord>(record: &R, phrase: &str) -> bool {
    phrase.is_empty()
        || record
            .search_text()
            .to_lowercase()
            .contains(&phrase.to_lowercase())
}
