//! Sorting day groups by date and transactions by amount.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::models::DayGroup;

/// The sort option chosen in the sort menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the order the transactions were received in.
    #[default]
    Default,
    /// Oldest day first.
    DateAscending,
    /// Newest day first.
    DateDescending,
    /// Smallest amount first within each day.
    AmountAscending,
    /// Largest amount first within each day.
    AmountDescending,
}

impl SortOrder {
    /// Whether this is the "keep received order" option.
    pub fn is_default(self) -> bool {
        self == Self::Default
    }

    /// The text shown in the filter menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::DateAscending => "By date ascending",
            Self::DateDescending => "By date descending",
            Self::AmountAscending => "By amount ascending",
            Self::AmountDescending => "By amount descending",
        }
    }
}

/// The direction to sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

/// Sort day groups by the date of their first transaction.
///
/// Groups without a usable date (empty groups, or a malformed date on the
/// first transaction) stay in the slot they occupy and the dated groups are
/// sorted around them. Groups with equal dates keep their relative order.
pub fn sort_by_date(groups: &mut [DayGroup], direction: SortDirection) {
    let mut dated: Vec<(usize, time::Date)> = groups
        .iter()
        .enumerate()
        .filter_map(|(index, group)| {
            group
                .first()
                .and_then(|transaction| transaction.calendar_date())
                .map(|date| (index, date))
        })
        .collect();

    if dated.len() < groups.len() {
        tracing::debug!(
            "{} day groups have no usable date and keep their position",
            groups.len() - dated.len()
        );
    }

    let slots: Vec<usize> = dated.iter().map(|(index, _)| *index).collect();

    match direction {
        SortDirection::Ascending => dated.sort_by(|(_, a), (_, b)| a.cmp(b)),
        SortDirection::Descending => dated.sort_by(|(_, a), (_, b)| b.cmp(a)),
    }

    let sorted: Vec<DayGroup> = dated
        .iter()
        .map(|(index, _)| std::mem::take(&mut groups[*index]))
        .collect();

    for (slot, group) in slots.into_iter().zip(sorted) {
        groups[slot] = group;
    }
}

/// Sort the transactions of each day group by amount.
///
/// The order of the groups themselves is not changed.
pub fn sort_by_amount(groups: &mut [DayGroup], direction: SortDirection) {
    for group in groups {
        match direction {
            SortDirection::Ascending => group.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
            SortDirection::Descending => group.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        }
    }
}
