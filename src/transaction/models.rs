//! The transaction record and day groups.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The format of [Transaction::date], e.g. "2023-01-31".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Which way money moved in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    /// Money received into the account.
    Incoming,
    /// Money paid out of the account.
    Outgoing,
}

/// Whether a transaction is still held or has been finalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    /// The amount is on hold and the transaction is pending.
    Blockade,
    /// The transaction has been booked.
    Settled,
}

/// A single ledger entry as received from the banking API.
///
/// The view engines never change a transaction, they only decide which
/// transactions are shown and in what order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: String,
    /// The calendar date as "YYYY-MM-DD". Kept as received so that malformed
    /// dates can pass through the filters untouched.
    pub date: String,
    /// The time of day, e.g. "14:05".
    pub time: String,
    /// A free text title of what the transaction was for.
    pub title: String,
    /// The account number or card reference on the other side.
    pub counterparty: String,
    /// Which way the money moved.
    pub direction: TransactionDirection,
    /// The category label, e.g. "Groceries".
    pub category: String,
    /// The (non-negative) amount of money moved.
    pub amount: f64,
    /// The currency code of `amount`.
    pub currency: String,
    /// The account balance after this transaction.
    pub balance_after: f64,
    /// The currency code of the account.
    pub account_currency: String,
    /// Whether the transaction is pending or booked.
    pub status: SettlementStatus,
}

impl Transaction {
    /// Parse [Transaction::date], returning `None` for a malformed date.
    pub fn calendar_date(&self) -> Option<Date> {
        parse_date(&self.date).ok()
    }
}

/// Parse a "YYYY-MM-DD" date, ignoring surrounding whitespace.
///
/// # Errors
/// Returns [Error::InvalidDate] with the offending text if it is not a valid
/// calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Transactions that share the same calendar date.
pub type DayGroup = Vec<Transaction>;

/// The sum of money in and out for one day group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    /// Sum of incoming amounts.
    pub income: f64,
    /// Sum of outgoing amounts.
    pub expenses: f64,
}

impl DayTotals {
    /// Sum the amounts of a day group by direction.
    pub fn for_group(group: &[Transaction]) -> Self {
        group
            .iter()
            .fold(DayTotals::default(), |mut totals, transaction| {
                match transaction.direction {
                    TransactionDirection::Incoming => totals.income += transaction.amount,
                    TransactionDirection::Outgoing => totals.expenses += transaction.amount,
                }
                totals
            })
    }

    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}
