#![deny(unsafe_code)]

use std::borrow::Cow;

use backoffice_model::{FieldName, Record};

use crate::ViewState;

/// Rows the engine can search. Implemented for [`Record`]; screens with
/// typed rows implement it themselves.
pub trait Searchable {
    /// Text the filter matches for `field`. Absent values match as "".
    fn search_text(&self, field: &FieldName) -> Cow<'_, str>;
}

impl Searchable for Record {
    fn search_text(&self, field: &FieldName) -> Cow<'_, str> {
        Record::search_text(self, field)
    }
}

/// The slice of rows a table should render, plus the pagination facts the
/// chrome needs. Pure function of `(data, fields, state)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a, T> {
    /// All rows passing the search filter, in input order.
    pub filtered: Vec<&'a T>,
    /// The rows on the effective current page.
    pub paginated: Vec<&'a T>,
    /// The effective page, re-clamped against the filtered set.
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Compute the current view of `data`.
///
/// Filtering: a row passes when `fields` is empty, or when at least one
/// named field's text contains the search term, case-insensitively. Empty
/// search terms match everything.
///
/// Pagination: `total_pages = max(1, ceil(total_items / items_per_page))`;
/// the state's page is clamped into `[1, total_pages]` so a shrunken result
/// set never leaves the view pointing past the end.
///
/// Deterministic: identical inputs always produce identical results.
pub fn compute<'a, T: Searchable>(
    data: &'a [T],
    fields: &[FieldName],
    state: &ViewState,
) -> ViewResult<'a, T> {
    let needle = state.search_term().to_lowercase();
    let filtered: Vec<&'a T> = data
        .iter()
        .filter(|row| row_matches(*row, fields, &needle))
        .collect();

    let items_per_page = state.items_per_page();
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(items_per_page).max(1);
    let current_page = state.current_page().min(total_pages);
    let start_index = (current_page - 1) * items_per_page;
    let end_index = (start_index + items_per_page).min(total_items);
    let paginated = filtered[start_index..end_index].to_vec();

    ViewResult {
        filtered,
        paginated,
        current_page,
        total_items,
        total_pages,
        start_index,
        end_index,
    }
}

fn row_matches<T: Searchable>(row: &T, fields: &[FieldName], needle: &str) -> bool {
    if fields.is_empty() || needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| row.search_text(field).to_lowercase().contains(needle))
}

/// One collection screen's view: the search fields it exposes plus its
/// cursor. The owning screen mutates through the setters and calls
/// [`CollectionView::recompute`] after each mutation or data refresh.
#[derive(Debug, Clone)]
pub struct CollectionView {
    fields: Vec<FieldName>,
    state: ViewState,
}

impl CollectionView {
    pub fn new(fields: Vec<FieldName>, items_per_page: usize) -> Self {
        Self {
            fields,
            state: ViewState::new(items_per_page),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_fields(&self) -> &[FieldName] {
        &self.fields
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.state.set_items_per_page(items_per_page);
    }

    pub fn set_page(&mut self, requested: i64, total_pages: usize) {
        self.state.set_page(requested, total_pages);
    }

    pub fn recompute<'a, T: Searchable>(&self, data: &'a [T]) -> ViewResult<'a, T> {
        compute(data, &self.fields, &self.state)
    }
}
