//! A shared filter store that publishes filtered transactions to subscribers.
//!
//! One [FilterStore] holds the filter state for every screen that shows the
//! day-grouped transaction list. Screens subscribe to it and all of them see
//! the same result after each [FilterStore::refresh].

use std::sync::{Arc, Mutex, MutexGuard};

use time::Date;
use tokio::sync::watch;

use crate::{
    Error,
    transaction::{DayGroup, FilterMenus, FilterSelection, TransactionFilters},
};

/// What subscribers see after each refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSnapshot {
    /// The filtered day groups.
    pub transactions: Arc<Vec<DayGroup>>,
    /// Which filter menus are expanded.
    pub expansion_flags: [bool; 3],
    /// Whether the mobile filter drawer is open.
    pub mobile_filters_opened: bool,
}

/// Owns the filter engine and menu state and publishes their result.
#[derive(Debug)]
pub struct FilterStore {
    filters: TransactionFilters,
    menus: FilterMenus,
    sender: watch::Sender<FilterSnapshot>,
}

/// A handle to a [FilterStore] shared between consumers.
pub type SharedFilterStore = Arc<Mutex<FilterStore>>;

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    /// Create a store with no transactions.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(FilterSnapshot::default());

        Self {
            filters: TransactionFilters::new(),
            menus: FilterMenus::default(),
            sender,
        }
    }

    /// Wrap the store in a handle that can be cloned and shared.
    pub fn shared(self) -> SharedFilterStore {
        Arc::new(Mutex::new(self))
    }

    /// Get notified of every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FilterSnapshot> {
        self.sender.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> FilterSnapshot {
        self.sender.borrow().clone()
    }

    /// The underlying filter engine.
    pub fn filters(&self) -> &TransactionFilters {
        &self.filters
    }

    /// The filter menu state, for menu clicks.
    pub fn menus_mut(&mut self) -> &mut FilterMenus {
        &mut self.menus
    }

    /// Start showing a new set of transactions with all filters reset.
    ///
    /// The unfiltered groups are published straight away.
    pub fn begin_context(&mut self, groups: Vec<DayGroup>) {
        self.filters.reset_selected_filters();
        self.filters.set_original_transactions(groups);
        let transactions = Arc::new(self.filters.original_transactions().to_vec());
        self.publish(transactions);
    }

    /// Replace the selected options. Call [FilterStore::refresh] to publish.
    pub fn select(&mut self, selection: FilterSelection) {
        self.filters.set_selected_filters(selection);
    }

    /// Replace the search phrase. Call [FilterStore::refresh] to publish.
    pub fn search(&mut self, phrase: &str) {
        self.filters.set_search_phrase(phrase);
    }

    /// Apply the current filters and publish the result.
    pub fn refresh(&mut self, today: Date) -> Arc<Vec<DayGroup>> {
        let transactions = Arc::new(self.filters.apply_filters(today, &mut self.menus));
        self.publish(transactions.clone());

        transactions
    }

    fn publish(&mut self, transactions: Arc<Vec<DayGroup>>) {
        let snapshot = FilterSnapshot {
            transactions,
            expansion_flags: self.menus.expansion_flags(),
            mobile_filters_opened: self.menus.is_mobile_filters_opened(),
        };

        self.sender.send_replace(snapshot);
        tracing::debug!(
            "published filter snapshot to {} subscribers",
            self.sender.receiver_count()
        );
    }
}

/// Lock a shared store.
///
/// # Errors
/// Returns [Error::StoreLockError] if another holder of the lock panicked.
pub fn lock_store(store: &SharedFilterStore) -> Result<MutexGuard<'_, FilterStore>, Error> {
    store.lock().map_err(|_| Error::StoreLockError)
}
