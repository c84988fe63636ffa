//! Pagination types
//!
//! Defines the page, next-page and traversal state abstractions used by the
//! collector.

/// One fetched page: ordered records plus the next-page reference
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// Records in server order
    pub records: Vec<R>,
    /// Reference to the next page; `None` on the last page
    pub next: Option<String>,
}

impl<R> Page<R> {
    /// Create a page, normalising an empty reference to `None`
    pub fn new(records: Vec<R>, next: Option<String>) -> Self {
        Self {
            records,
            next: next.filter(|n| !n.is_empty()),
        }
    }

    /// Create a last page
    pub fn last(records: Vec<R>) -> Self {
        Self::new(records, None)
    }

    /// Whether the server announced another page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Where the traversal goes after this page
    pub fn next_page(&self) -> NextPage {
        match &self.next {
            Some(reference) => NextPage::Continue {
                reference: reference.clone(),
            },
            None => NextPage::Done,
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this reference (path or absolute URL)
    Continue {
        /// Opaque reference supplied by the server
        reference: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Upper bound on pages fetched per traversal; `None` is unbounded
    pub max_pages: Option<u32>,
}

impl PaginationConfig {
    /// Unbounded traversal
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the traversal at `max_pages` pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Whether another page may be fetched after `pages_fetched` pages
    pub fn allows(&self, pages_fetched: u32) -> bool {
        self.max_pages.map_or(true, |max| pages_fetched < max)
    }
}

/// Tracks pagination state during one traversal
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Reference of the page to fetch next; `None` once the last page is in
    pub cursor: Option<String>,
}

impl PaginationState {
    /// State for a traversal that begins at `start`
    pub fn starting_at(start: impl Into<String>) -> Self {
        Self {
            cursor: Some(start.into()),
            ..Self::default()
        }
    }

    /// Whether the last page has been fetched
    pub fn is_done(&self) -> bool {
        self.cursor.is_none()
    }

    /// Account for a fetched page and move the cursor
    pub fn advance(&mut self, records: usize, next: &NextPage) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
        self.cursor = match next {
            NextPage::Continue { reference } => Some(reference.clone()),
            NextPage::Done => None,
        };
    }
}
