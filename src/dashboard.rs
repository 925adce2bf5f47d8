//! Canonical dashboard state and its memoized derivation.
//!
//! `Dashboard` owns the record store, the query and the pager. The rows on
//! screen are never stored; they are derived from that state on demand and
//! cached until the next state change.

use std::cell::OnceCell;

use crate::core::errors::Result;
use crate::model::{Status, UserId, UserRecord};
use crate::pipeline::{
    derive_page, summarize, DateRange, Filters, PageView, Pager, Query, SortConfig, SortKey,
    SummaryMetrics,
};
use crate::store::{RecordStore, RevealPolicy, ScrollMetrics};

#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    query: Query,
    pager: Pager,
    summary: SummaryMetrics,
    derived: OnceCell<PageView>,
}

impl Dashboard {
    /// Mount the view over a dataset: reveal the first batch, no filters, no sort, page 1.
    pub fn mount(dataset: Vec<UserRecord>, policy: RevealPolicy) -> Self {
        let summary = summarize(&dataset);
        let pager = Pager::for_dataset(dataset.len());
        let store = RecordStore::new(dataset, policy);
        tracing::debug!(
            total = store.dataset().len(),
            revealed = store.revealed().len(),
            pages = pager.total_pages(),
            "mounted dashboard"
        );
        Self {
            store,
            query: Query::default(),
            pager,
            summary,
            derived: OnceCell::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn filters(&self) -> &Filters {
        &self.query.filters
    }

    pub fn sort(&self) -> &SortConfig {
        &self.query.sort
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Metrics over the full dataset as loaded.
    pub fn summary(&self) -> &SummaryMetrics {
        &self.summary
    }

    /// The current page, derived from canonical state.
    pub fn view(&self) -> &PageView {
        self.derived
            .get_or_init(|| derive_page(self.store.revealed(), &self.query, &self.pager))
    }

    /// Records on the current page, in display order.
    pub fn page_rows(&self) -> Vec<&UserRecord> {
        let revealed = self.store.revealed();
        self.view()
            .rows
            .iter()
            .filter_map(|&idx| revealed.get(idx))
            .collect()
    }

    fn invalidate(&mut self) {
        self.derived.take();
    }

    /// Criteria changed: back to page 1, keep the revealed set.
    fn query_changed(&mut self) {
        self.pager.reset();
        self.invalidate();
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) {
        self.query.filters.status = status;
        self.query_changed();
    }

    pub fn set_name_filter(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.query.filters.name = (!name.is_empty()).then_some(name);
        self.query_changed();
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.query.filters.date_range = range;
        self.query_changed();
    }

    pub fn clear_filters(&mut self) {
        self.query.filters = Filters::default();
        self.query_changed();
    }

    /// Column header selection, see [`SortConfig::toggle`].
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.query.sort.toggle(key);
        self.query_changed();
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.query.sort = sort;
        self.query_changed();
    }

    pub fn first_page(&mut self) {
        self.pager.first();
        self.invalidate();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
        self.invalidate();
    }

    pub fn next_page(&mut self) {
        self.pager.next();
        self.invalidate();
    }

    pub fn last_page(&mut self) {
        self.pager.last();
        self.invalidate();
    }

    pub fn select_page(&mut self, page: usize) -> Result<()> {
        self.pager.select(page)?;
        self.invalidate();
        Ok(())
    }

    /// Scroll event from the table view, measured in rows. Returns how many
    /// records were revealed.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics) -> usize {
        let added = self.store.on_row_scroll(metrics);
        if added > 0 {
            self.invalidate();
        }
        added
    }

    pub fn reveal_all(&mut self) -> usize {
        let added = self.store.reveal_all();
        if added > 0 {
            self.invalidate();
        }
        added
    }

    /// Status edit on a revealed record. Returns `false` for unknown ids.
    pub fn update_status(&mut self, id: &UserId, status: Status) -> bool {
        let updated = self.store.update_status(id, status);
        if updated {
            self.invalidate();
        }
        updated
    }

    pub fn update_status_str(&mut self, id: &UserId, status: &str) -> Result<bool> {
        let status = status.parse::<Status>()?;
        Ok(self.update_status(id, status))
    }
}
