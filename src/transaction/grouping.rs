//! Grouping flat transaction lists into day groups.

use super::models::{DayGroup, Transaction};

/// Group a date-ordered list of transactions into day groups.
///
/// A new group starts whenever the date string differs from the previous
/// transaction's, so the group key is always exactly the date field.
/// Input that is not ordered by date produces one group per run of equal
/// dates.
pub fn group_transactions_by_day(transactions: Vec<Transaction>) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();

    for transaction in transactions {
        match days.last_mut() {
            Some(current) if current.first().map(|t| &t.date) == Some(&transaction.date) => {
                current.push(transaction);
            }
            _ => days.push(vec![transaction]),
        }
    }

    days
}
