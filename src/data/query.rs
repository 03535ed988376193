//! Filter → sort → paginate pipeline over organization records

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};

use super::models::Organization;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Column a query may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Director,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    }
}

/// Immutable set of query parameters.
///
/// Builder methods consume the value and return an updated copy, so the
/// caller owns every change between two queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    search: String,
    sort_field: Option<SortField>,
    sort_dir: SortDir,
    page: usize,
    page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: None,
            sort_dir: SortDir::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substring to look for in the director field
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.search = q.into();
        self
    }

    pub fn with_sort(mut self, field: Option<SortField>, dir: SortDir) -> Self {
        self.sort_field = field;
        self.sort_dir = dir;
        self
    }

    /// 1-based page; 0 is clamped to 1
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Page size; 0 is clamped to 1
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    /// Records on the requested page
    pub items: Vec<Organization>,
    /// Number of records matching the filter, before pagination
    pub total: usize,
    /// Requested page (after clamping)
    pub page: usize,
    pub page_size: usize,
    /// max(1, ceil(total / page_size))
    pub total_pages: usize,
}

impl QueryPage {
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for QueryPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to load collation data: {0}")]
pub struct CollationError(String);

/// Locale-aware string comparison for the directory's fixed locale (ru).
///
/// Uses ICU collation at tertiary strength: alphabetic order first, then
/// diacritics (е before ё), then case (lowercase before uppercase).
pub struct Collation {
    collator: Collator,
}

impl Collation {
    pub fn russian() -> Result<Self, CollationError> {
        let collator = Collator::try_new(&locale!("ru").into(), CollatorOptions::new())
            .map_err(|e| CollationError(format!("{e:?}")))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation").field("locale", &"ru").finish()
    }
}

/// Run the query pipeline over a record list kept in store order.
pub fn run_query(items: &[Organization], params: &QueryParams, collation: &Collation) -> QueryPage {
    let needle = params.search.trim().to_lowercase();

    let mut list: Vec<&Organization> = if needle.is_empty() {
        items.iter().collect()
    } else {
        items
            .iter()
            .filter(|org| org.director.to_lowercase().contains(&needle))
            .collect()
    };

    if let Some(field) = params.sort_field {
        // Stable sort: ties keep store order in both directions
        list.sort_by(|a, b| {
            params
                .sort_dir
                .apply(collation.compare(a.field(field), b.field(field)))
        });
    }

    let total = list.len();
    let page_size = params.page_size.max(1);
    let page = params.page.max(1);
    let start = (page - 1).saturating_mul(page_size);

    let items = list
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    QueryPage {
        items,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size).max(1),
    }
}
