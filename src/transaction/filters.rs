//! The transaction filter engine.
//!
//! [TransactionFilters] keeps the original day-grouped transactions and the
//! current filter selection, and derives the displayed day groups from them.
//! Filters are always applied in the same order: search, sort, time window,
//! then status. Each step works on the output of the previous one.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use time::Date;

use super::{
    menu::{FilterMenu, FilterMenus},
    models::{DayGroup, SettlementStatus, Transaction},
    sort::{SortDirection, SortOrder, sort_by_amount, sort_by_date},
    window::DurationWindow,
};

/// The status option chosen in the status menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Show transactions of any status.
    #[default]
    Default,
    /// Only pending transactions.
    Blockade,
    /// Only booked transactions.
    Settled,
}

impl StatusFilter {
    /// Whether this is the "any status" option.
    pub fn is_default(self) -> bool {
        self == Self::Default
    }

    /// The text shown in the filter menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Any status",
            Self::Blockade => "Blockade",
            Self::Settled => "Settled",
        }
    }

    fn status(self) -> Option<SettlementStatus> {
        match self {
            Self::Default => None,
            Self::Blockade => Some(SettlementStatus::Blockade),
            Self::Settled => Some(SettlementStatus::Settled),
        }
    }
}

/// The options chosen in the three filter menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// The sort menu option.
    pub sort: SortOrder,
    /// The time-window menu option.
    pub duration: DurationWindow,
    /// The status menu option.
    pub status: StatusFilter,
}

/// Derives the displayed transactions from the original day groups.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilters {
    original: Vec<DayGroup>,
    selection: FilterSelection,
    search_phrase: String,
}

impl TransactionFilters {
    /// Create an engine with no transactions and default filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the original, unfiltered day groups.
    ///
    /// The engine owns its copy, so nothing a caller does with the arrays
    /// returned by [TransactionFilters::apply_filters] can change it.
    pub fn set_original_transactions(&mut self, groups: Vec<DayGroup>) {
        tracing::debug!(
            "set {} original day groups with {} transactions",
            groups.len(),
            groups.iter().map(Vec::len).sum::<usize>()
        );
        self.original = groups;
    }

    /// The unfiltered day groups.
    pub fn original_transactions(&self) -> &[DayGroup] {
        &self.original
    }

    /// Reset all three options to their defaults and clear the search phrase.
    ///
    /// Screens that show a new set of transactions call this first.
    pub fn reset_selected_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.search_phrase.clear();
    }

    /// Replace the selected options. Nothing is recomputed until
    /// [TransactionFilters::apply_filters] is called.
    pub fn set_selected_filters(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// The currently selected options.
    pub fn selected_filters(&self) -> FilterSelection {
        self.selection
    }

    /// Replace the search phrase. An empty phrase disables the search.
    pub fn set_search_phrase(&mut self, phrase: &str) {
        self.search_phrase = phrase.to_owned();
    }

    /// The current search phrase.
    pub fn search_phrase(&self) -> &str {
        &self.search_phrase
    }

    /// Compute the displayed day groups from the original ones.
    ///
    /// Day groups are never removed, even when every transaction in them has
    /// been filtered out, so day indices stay aligned with the original.
    /// The menu of every option left at its default is collapsed.
    pub fn apply_filters(&self, today: Date, menus: &mut FilterMenus) -> Vec<DayGroup> {
        let mut groups = self.original.clone();

        if !self.search_phrase.is_empty() {
            search(&mut groups, &self.search_phrase);
        }

        match self.selection.sort {
            SortOrder::Default => menus.collapse(FilterMenu::Sort),
            SortOrder::DateAscending => sort_by_date(&mut groups, SortDirection::Ascending),
            SortOrder::DateDescending => sort_by_date(&mut groups, SortDirection::Descending),
            SortOrder::AmountAscending => sort_by_amount(&mut groups, SortDirection::Ascending),
            SortOrder::AmountDescending => sort_by_amount(&mut groups, SortDirection::Descending),
        }

        match self.selection.duration.cutoff(today) {
            None => menus.collapse(FilterMenu::Duration),
            Some(cutoff) => retain_transactions(&mut groups, |transaction| {
                transaction
                    .calendar_date()
                    .is_some_and(|date| cutoff.contains(date))
            }),
        }

        match self.selection.status.status() {
            None => menus.collapse(FilterMenu::Status),
            Some(status) => {
                retain_transactions(&mut groups, |transaction| transaction.status == status)
            }
        }

        tracing::debug!(
            "applied filters {:?} with search phrase {:?}: {} of {} transactions shown",
            self.selection,
            self.search_phrase,
            count(&groups),
            count(&self.original)
        );

        groups
    }
}

/// Keep transactions whose title contains `phrase`, ignoring case.
fn search(groups: &mut [DayGroup], phrase: &str) {
    let phrase = phrase.to_lowercase();

    retain_transactions(groups, |transaction| {
        transaction.title.to_lowercase().contains(&phrase)
    });
}

fn retain_transactions<F>(groups: &mut [DayGroup], mut keep: F)
where
    F: FnMut(&Transaction) -> bool,
{
    for group in groups {
        group.retain(|transaction| keep(transaction));
    }
}

fn count(groups: &[DayGroup]) -> usize {
    groups.iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{
        DayGroup, DurationWindow, FilterMenu, FilterMenus, SettlementStatus, SortOrder,
        test_utils::{ids, transaction, with_status},
    };

    use super::{FilterSelection, StatusFilter, TransactionFilters};

    fn sample_groups() -> Vec<DayGroup> {
        vec![
            vec![
                transaction("1", "2024-05-15", "Coffee", 4.0),
                with_status(
                    transaction("2", "2024-05-15", "Groceries", 52.5),
                    SettlementStatus::Blockade,
                ),
            ],
            vec![
                transaction("3", "2024-05-14", "Rent", 900.0),
                transaction("4", "2024-05-14", "coffee beans", 12.0),
            ],
            vec![transaction("5", "2024-05-01", "Gym", 30.0)],
            vec![transaction("6", "2023-12-01", "Coffee machine", 300.0)],
        ]
    }

    fn engine() -> TransactionFilters {
        let mut filters = TransactionFilters::new();
        filters.set_original_transactions(sample_groups());
        filters
    }

    const TODAY: time::Date = date!(2024 - 05 - 15);

    #[test]
    fn reset_then_apply_returns_original() {
        let mut filters = engine();
        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::DateAscending,
            duration: DurationWindow::LastWeek,
            status: StatusFilter::Settled,
        });
        filters.set_search_phrase("coffee");

        filters.reset_selected_filters();
        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(got, sample_groups());
        assert_eq!(filters.search_phrase(), "");
        assert_eq!(filters.selected_filters(), FilterSelection::default());
    }

    #[test]
    fn search_example_keeps_empty_groups() {
        let mut filters = TransactionFilters::new();
        filters.set_original_transactions(vec![
            vec![transaction("1", "2023-01-01", "Test1", 1.0)],
            vec![transaction("2", "2023-01-02", "Test2", 1.0)],
        ]);
        filters.set_search_phrase("Test1");

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].len(), 1);
        assert_eq!(got[1].len(), 0);
    }

    #[test]
    fn search_ignores_case() {
        let mut filters = engine();
        filters.set_search_phrase("COFFEE");

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(ids(&got), vec![vec!["1"], vec!["4"], vec![], vec!["6"]]);
    }

    #[test]
    fn amount_sort_orders_within_each_group() {
        let mut filters = engine();
        filters.set_search_phrase("e");

        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::AmountAscending,
            ..Default::default()
        });
        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(
            ids(&got),
            vec![vec!["1", "2"], vec!["4", "3"], vec![], vec!["6"]]
        );

        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::AmountDescending,
            ..Default::default()
        });
        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(
            ids(&got),
            vec![vec!["2", "1"], vec!["3", "4"], vec![], vec!["6"]]
        );
    }

    #[test]
    fn only_default_options_are_default() {
        let selection = FilterSelection::default();
        assert!(selection.sort.is_default());
        assert!(selection.duration.is_default());
        assert!(selection.status.is_default());

        assert!(!SortOrder::DateDescending.is_default());
        assert!(!DurationWindow::LastMonth.is_default());
        assert!(!StatusFilter::Settled.is_default());
    }

    #[test]
    fn filtering_never_adds_transactions() {
        let original = sample_groups();
        let mut filters = engine();

        for duration in [
            DurationWindow::Default,
            DurationWindow::LastDay,
            DurationWindow::LastWeek,
            DurationWindow::LastYear,
        ] {
            for status in [
                StatusFilter::Default,
                StatusFilter::Blockade,
                StatusFilter::Settled,
            ] {
                filters.set_selected_filters(FilterSelection {
                    sort: SortOrder::AmountDescending,
                    duration,
                    status,
                });

                let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

                let total: usize = got.iter().map(Vec::len).sum();
                let original_total: usize = original.iter().map(Vec::len).sum();
                assert!(total <= original_total);
                assert!(
                    got.iter()
                        .flatten()
                        .all(|t| original.iter().flatten().any(|o| o == t))
                );
            }
        }
    }

    #[test]
    fn last_day_keeps_only_yesterday() {
        let mut filters = engine();
        filters.set_selected_filters(FilterSelection {
            duration: DurationWindow::LastDay,
            ..Default::default()
        });

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(ids(&got), vec![vec![], vec!["3", "4"], vec![], vec![]]);
    }

    #[test]
    fn longer_windows_include_today() {
        let mut filters = engine();

        let mut expect = |duration, want: Vec<Vec<&str>>| {
            filters.set_selected_filters(FilterSelection {
                duration,
                ..Default::default()
            });
            let got = filters.apply_filters(TODAY, &mut FilterMenus::default());
            assert_eq!(ids(&got), want, "{duration:?}");
        };

        expect(
            DurationWindow::LastWeek,
            vec![vec!["1", "2"], vec!["3", "4"], vec![], vec![]],
        );
        expect(
            DurationWindow::LastMonth,
            vec![vec!["1", "2"], vec!["3", "4"], vec!["5"], vec![]],
        );
        expect(
            DurationWindow::LastHalfYear,
            vec![vec!["1", "2"], vec!["3", "4"], vec!["5"], vec!["6"]],
        );
    }

    #[test]
    fn malformed_dates_fail_active_time_window_only() {
        let mut filters = TransactionFilters::new();
        filters.set_original_transactions(vec![vec![transaction("x", "??", "Odd", 1.0)]]);

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());
        assert_eq!(ids(&got), vec![vec!["x"]]);

        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::DateDescending,
            duration: DurationWindow::LastYear,
            status: StatusFilter::Default,
        });
        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());
        assert_eq!(ids(&got), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn status_filter_matches_exactly() {
        let mut filters = engine();
        filters.set_selected_filters(FilterSelection {
            status: StatusFilter::Blockade,
            ..Default::default()
        });

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        assert_eq!(ids(&got), vec![vec!["2"], vec![], vec![], vec![]]);
    }

    #[test]
    fn filters_compose_in_order() {
        let mut filters = engine();
        filters.set_search_phrase("coffee");
        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::DateAscending,
            duration: DurationWindow::LastWeek,
            status: StatusFilter::Settled,
        });

        let got = filters.apply_filters(TODAY, &mut FilterMenus::default());

        // The emptied group keeps its slot while the dated groups are reordered.
        assert_eq!(ids(&got), vec![vec![], vec!["4"], vec![], vec!["1"]]);
    }

    #[test]
    fn apply_does_not_change_original() {
        let mut filters = engine();
        filters.set_selected_filters(FilterSelection {
            sort: SortOrder::DateAscending,
            ..Default::default()
        });

        let mut got = filters.apply_filters(TODAY, &mut FilterMenus::default());
        got[0].clear();

        assert_eq!(filters.original_transactions(), sample_groups().as_slice());
    }

    #[test]
    fn default_options_collapse_their_menus() {
        let mut filters = engine();
        let mut menus = FilterMenus::default();
        menus.change_menu_state(FilterMenu::Sort);
        menus.change_menu_state(FilterMenu::Duration);
        menus.change_menu_state(FilterMenu::Status);
        menus.toggle_mobile_filters();
        filters.set_selected_filters(FilterSelection {
            duration: DurationWindow::LastWeek,
            ..Default::default()
        });

        filters.apply_filters(TODAY, &mut menus);

        assert_eq!(menus.expansion_flags(), [false, true, false]);
        assert!(!menus.is_mobile_filters_opened());
    }
}
