//! Directory view state: query parameters, the visible page and the
//! debounced search box.
//!
//! Nothing here touches the terminal, so the controller rules can be tested
//! with a plain store.

use std::time::{Duration, Instant};

use crate::data::{Organization, OrganizationStore, QueryPage, QueryParams, SortDir, SortField};

#[derive(Debug, Clone)]
struct PendingSearch {
    text: String,
    requested_at: Instant,
}

/// Controller state behind the record table
#[derive(Debug, Clone)]
pub struct DirectoryView {
    params: QueryParams,
    page: QueryPage,
    selected: Option<usize>,
    pending_search: Option<PendingSearch>,
    debounce: Duration,
}

impl DirectoryView {
    pub fn new(page_size: usize, debounce: Duration) -> Self {
        let params = QueryParams::new().with_page_size(page_size);
        Self {
            page: QueryPage {
                page_size: params.page_size(),
                ..QueryPage::default()
            },
            params,
            selected: None,
            pending_search: None,
            debounce,
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Result of the last query
    pub fn page(&self) -> &QueryPage {
        &self.page
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&Organization> {
        self.selected.and_then(|i| self.page.items.get(i))
    }

    /// Search text waiting for the debounce to elapse
    pub fn pending_search(&self) -> Option<&str> {
        self.pending_search.as_ref().map(|p| p.text.as_str())
    }

    /// Re-run the query with the current parameters
    pub fn refresh(&mut self, store: &OrganizationStore) {
        self.page = store.query(&self.params);
        self.selected = match self.page.items.len() {
            0 => None,
            len => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    fn apply(&mut self, params: QueryParams, store: &OrganizationStore) {
        self.params = params;
        self.refresh(store);
    }

    /// Record a keystroke in the search box; replaces any pending text
    pub fn queue_search(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_search = Some(PendingSearch {
            text: text.into(),
            requested_at: now,
        });
    }

    /// Apply the pending search once the input has been quiet long enough.
    /// Returns true when the query changed.
    pub fn tick(&mut self, now: Instant, store: &OrganizationStore) -> bool {
        let Some(pending) = self.pending_search.as_ref() else {
            return false;
        };
        if now.saturating_duration_since(pending.requested_at) < self.debounce {
            return false;
        }
        self.flush_search(store)
    }

    /// Apply the pending search immediately
    pub fn flush_search(&mut self, store: &OrganizationStore) -> bool {
        let Some(pending) = self.pending_search.take() else {
            return false;
        };
        tracing::debug!(search = %pending.text, "Applying search");
        let params = self.params.clone().with_search(pending.text).with_page(1);
        self.selected = None;
        self.apply(params, store);
        true
    }

    /// Drop any pending text and show every record
    pub fn clear_search(&mut self, store: &OrganizationStore) {
        self.pending_search = None;
        let params = self.params.clone().with_search("").with_page(1);
        self.selected = None;
        self.apply(params, store);
    }

    /// Same column flips the direction; a new column starts ascending
    pub fn toggle_sort(&mut self, field: SortField, store: &OrganizationStore) {
        let dir = if self.params.sort_field() == Some(field) {
            self.params.sort_dir().toggled()
        } else {
            SortDir::Asc
        };
        let params = self.params.clone().with_sort(Some(field), dir);
        self.apply(params, store);
    }

    pub fn next_page(&mut self, store: &OrganizationStore) {
        let page = (self.params.page() + 1).min(self.page.total_pages);
        if page != self.params.page() {
            self.selected = None;
            let params = self.params.clone().with_page(page);
            self.apply(params, store);
        }
    }

    pub fn prev_page(&mut self, store: &OrganizationStore) {
        let page = self.params.page().saturating_sub(1).max(1);
        if page != self.params.page() {
            self.selected = None;
            let params = self.params.clone().with_page(page);
            self.apply(params, store);
        }
    }

    /// Re-query after a delete, stepping back when the page emptied out
    pub fn after_delete(&mut self, store: &OrganizationStore) {
        self.refresh(store);
        if self.params.page() > 1 && self.page.items.is_empty() {
            let params = self.params.clone().with_page(self.params.page() - 1);
            self.selected = None;
            self.apply(params, store);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.page.items.len();
        if len > 0 {
            self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
        }
    }

    pub fn select_prev(&mut self) {
        if !self.page.items.is_empty() {
            self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        }
    }

    /// Select the row holding `id` if it is on the current page
    pub fn select_id(&mut self, id: &str) {
        if let Some(idx) = self.page.items.iter().position(|o| o.id == id) {
            self.selected = Some(idx);
        }
    }
}
