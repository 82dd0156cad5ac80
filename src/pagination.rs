use serde::Serialize;

/// Fixed client-side page size.
pub const RECORDS_PER_PAGE: usize = 16;

/// Computes the windowed page-label strip: page 1 and the last page are
/// always present, plus every page within one step of the current page.
/// `None` marks a collapsed gap rendered as an ellipsis.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let mut pages = Vec::new();
    for page in 1..=total_pages {
        let near_current = page + 1 >= current_page && page <= current_page + 1;
        if page == 1 || page == total_pages || near_current {
            pages.push(Some(page));
        } else if page + 2 == current_page || page == current_page + 2 {
            pages.push(None);
        }
    }
    pages
}

/// One rendered page of results together with its page-number strip.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

/// The full result set of the last successful search plus the current page.
///
/// The set is only ever replaced wholesale; `current_page` is 1-indexed and
/// clamped into `[1, page_count]` on every move.
#[derive(Debug, Clone)]
pub struct PaginationState<T> {
    results: Vec<T>,
    current_page: usize,
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            current_page: 1,
        }
    }
}

impl<T: Clone> PaginationState<T> {
    /// Replaces the result set wholesale and rewinds to the first page.
    pub fn replace(&mut self, results: Vec<T>) {
        self.results = results;
        self.current_page = 1;
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.current_page = 1;
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Derived page count; an empty set still counts as one page.
    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(RECORDS_PER_PAGE).max(1)
    }

    /// Moves to the requested page, clamped into range, and returns the page
    /// actually selected.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.page_count());
        self.current_page
    }

    /// Advances one page; returns `false` at the last page (no wraparound).
    pub fn next(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Retreats one page; returns `false` at the first page.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// The current page's slice and label strip.
    pub fn page(&self) -> Paginated<T> {
        let start = (self.current_page - 1) * RECORDS_PER_PAGE;
        let end = (start + RECORDS_PER_PAGE).min(self.results.len());
        let items = self.results[start..end].to_vec();
        Paginated::new(items, self.current_page, self.page_count())
    }
}
