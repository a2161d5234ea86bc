use crate::api::common_types::{CardSummary, END_OF_RESULTS};

/// Client-side accumulation of every result page fetched for one query.
///
/// The catalog only offers a forward cursor, so pages are kept for the lifetime
/// of the query and paging back never goes to the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    records: Vec<CardSummary>,
    cursor: u64,
    current_page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: vec![],
            cursor: END_OF_RESULTS,
            current_page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Appends records in server order. No de-duplication is done.
    pub fn append_page(&mut self, records: Vec<CardSummary>, next_cursor: u64) {
        self.records.extend(records);
        self.cursor = next_cursor;
    }

    pub fn page_window(&self, page: usize) -> &[CardSummary] {
        let start = page.saturating_mul(self.page_size);
        if start >= self.records.len() {
            return &[];
        }

        let end = (start + self.page_size).min(self.records.len());
        &self.records[start..end]
    }

    /// True when `page` is the trailing page, is short, and the server has more.
    pub fn needs_fetch_to_fill(&self, page: usize) -> bool {
        self.page_window(page).len() < self.page_size
            && self.has_more()
            && page.saturating_add(1) >= self.total_pages_known_so_far()
    }

    /// Lower bound on the page count, more pages may exist server side.
    pub fn total_pages_known_so_far(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn has_page(&self, page: usize) -> bool {
        !self.page_window(page).is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.cursor != END_OF_RESULTS
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_window(&self) -> &[CardSummary] {
        self.page_window(self.current_page)
    }

    /// Index of the first record of the current window within all results.
    pub fn current_offset(&self) -> usize {
        self.current_page * self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Moves to the next page if it is already cached.
    pub fn advance(&mut self) -> bool {
        if self.has_page(self.current_page + 1) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}
