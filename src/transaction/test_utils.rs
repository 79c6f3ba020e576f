//! Fixtures shared by the transaction tests.

use super::models::{SettlementStatus, Transaction, TransactionDirection};

/// An outgoing, settled transaction in PLN.
pub(crate) fn transaction(id: &str, date: &str, title: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.to_owned(),
        date: date.to_owned(),
        time: "12:00".to_owned(),
        title: title.to_owned(),
        counterparty: "PL61 1090 1014 0000 0712 1981 2874".to_owned(),
        direction: TransactionDirection::Outgoing,
        category: "Other".to_owned(),
        amount,
        currency: "PLN".to_owned(),
        balance_after: 1000.0,
        account_currency: "PLN".to_owned(),
        status: SettlementStatus::Settled,
    }
}

pub(crate) fn with_direction(
    mut transaction: Transaction,
    direction: TransactionDirection,
) -> Transaction {
    transaction.direction = direction;
    transaction
}

pub(crate) fn with_status(mut transaction: Transaction, status: SettlementStatus) -> Transaction {
    transaction.status = status;
    transaction
}

/// The IDs of each group, handy for comparing shapes of day group arrays.
pub(crate) fn ids(groups: &[Vec<Transaction>]) -> Vec<Vec<&str>> {
    groups
        .iter()
        .map(|group| group.iter().map(|t| t.id.as_str()).collect())
        .collect()
}
