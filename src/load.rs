//! Functions to read transactions exported from the banking API.
//!
//! Two formats are supported:
//! - JSON, either a flat array of transactions or an array of day groups.
//! - CSV with a header row naming the transaction fields, e.g.
//!   `id,date,time,title,counterparty,direction,category,amount,currency,balanceAfter,accountCurrency,status`.
//!
//! Dates are not validated here. A record with a malformed date is kept and
//! simply sorts and filters as described in [crate::transaction].

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    Error,
    transaction::{DayGroup, Transaction, group_transactions_by_day},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTransactions {
    Grouped(Vec<DayGroup>),
    Flat(Vec<Transaction>),
}

/// Parse JSON text into day groups.
///
/// Day groups are taken as they are; a flat array is grouped by day.
///
/// # Errors
/// Returns [Error::JSONError] if the text is neither form.
pub fn parse_transactions_json(text: &str) -> Result<Vec<DayGroup>, Error> {
    let parsed: JsonTransactions = serde_json::from_str(text)?;

    let groups = match parsed {
        JsonTransactions::Grouped(groups) => groups,
        JsonTransactions::Flat(transactions) => group_transactions_by_day(transactions),
    };

    warn_about_malformed_dates(&groups);

    Ok(groups)
}

/// Parse CSV text into a flat list of transactions.
///
/// # Errors
/// Returns [Error::InvalidCSV] if the header is missing a field or a row
/// cannot be read as a transaction.
pub fn parse_transactions_csv(text: &str) -> Result<Vec<Transaction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut transactions = Vec::new();

    for (row_number, record) in reader.deserialize::<Transaction>().enumerate() {
        let transaction = record.map_err(|error| {
            // Row 1 is the header.
            Error::InvalidCSV(format!("row {}: {error}", row_number + 2))
        })?;
        transactions.push(transaction);
    }

    Ok(transactions)
}

/// Read a `.json` or `.csv` file into day groups.
///
/// # Errors
/// Returns [Error::IoError] if the file cannot be read,
/// [Error::UnsupportedFormat] for other extensions, and the parse errors of
/// [parse_transactions_json] and [parse_transactions_csv].
pub fn load_day_groups(path: &Path) -> Result<Vec<DayGroup>, Error> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !matches!(extension.as_str(), "json" | "csv") {
        return Err(Error::UnsupportedFormat(extension));
    }

    let text = fs::read_to_string(path).map_err(|error| Error::IoError {
        path: path.display().to_string(),
        reason: error.to_string(),
    })?;

    let groups = if extension == "json" {
        parse_transactions_json(&text)?
    } else {
        let groups = group_transactions_by_day(parse_transactions_csv(&text)?);
        warn_about_malformed_dates(&groups);
        groups
    };

    tracing::info!(
        "loaded {} day groups from {}",
        groups.len(),
        path.display()
    );

    Ok(groups)
}

fn warn_about_malformed_dates(groups: &[DayGroup]) {
    for transaction in groups.iter().flatten() {
        if transaction.calendar_date().is_none() {
            tracing::warn!(
                "transaction {} has a malformed date {:?}, it will not be sorted by date",
                transaction.id,
                transaction.date
            );
        }
    }
}
