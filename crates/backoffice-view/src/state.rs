#![deny(unsafe_code)]

use tracing::warn;

/// Search/pagination cursor for one on-screen collection.
///
/// Fields are private so the invariants hold by construction:
/// `current_page >= 1` and `items_per_page >= 1` at all times, and any
/// change that invalidates the prior paging position resets to page 1.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawViewState")]
pub struct ViewState {
    search_term: String,
    current_page: usize,
    items_per_page: usize,
}

/// On-wire shape of a state snapshot. Restored values go through the same
/// clamps as the setters so a stored snapshot cannot smuggle in a zero page
/// or page size.
#[derive(serde::Deserialize)]
struct RawViewState {
    search_term: String,
    current_page: usize,
    items_per_page: usize,
}

impl From<RawViewState> for ViewState {
    fn from(raw: RawViewState) -> Self {
        Self {
            search_term: raw.search_term,
            current_page: raw.current_page.max(1),
            items_per_page: clamp_page_size(raw.items_per_page),
        }
    }
}

impl ViewState {
    /// New state on page 1 with an empty search term.
    ///
    /// A zero `items_per_page` is clamped to 1; rejecting non-positive sizes
    /// outright is the caller's input validation, not the engine's.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: clamp_page_size(items_per_page),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Replace the search term. A changed query invalidates the prior paging
    /// position, so the page resets to 1. Any string is accepted; empty
    /// means "no filter".
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Replace the page size and reset to page 1. Zero clamps to 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = clamp_page_size(items_per_page);
        self.current_page = 1;
    }

    /// Request a page. Out-of-range requests (below 1 or beyond the last
    /// page) are clamped, never rejected; `total_pages` comes from the most
    /// recent [`ViewResult`](crate::ViewResult).
    pub fn set_page(&mut self, requested: i64, total_pages: usize) {
        self.current_page = clamp_page(requested, total_pages);
    }
}

pub(crate) fn clamp_page_size(items_per_page: usize) -> usize {
    if items_per_page == 0 {
        warn!("items_per_page of 0 clamped to 1");
        1
    } else {
        items_per_page
    }
}

pub(crate) fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(last, |page| page.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_clamps_to_one() {
        let state = ViewState::new(0);
        assert_eq!(state.items_per_page(), 1);
    }

    #[test]
    fn search_term_change_resets_page() {
        let mut state = ViewState::new(10);
        state.set_page(5, 8);
        assert_eq!(state.current_page(), 5);
        state.set_search_term("x");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_requests_clamp_both_ends() {
        let mut state = ViewState::new(10);
        state.set_page(-3, 4);
        assert_eq!(state.current_page(), 1);
        state.set_page(99, 4);
        assert_eq!(state.current_page(), 4);
        state.set_page(i64::MAX, 4);
        assert_eq!(state.current_page(), 4);
        state.set_page(2, 0);
        assert_eq!(state.current_page(), 1);
    }
}
