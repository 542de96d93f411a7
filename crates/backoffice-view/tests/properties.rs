//! Property tests for the pagination/search invariants.

use std::borrow::Cow;

use backoffice_model::FieldName;
use backoffice_view::{Searchable, ViewState, compute};
use proptest::prelude::*;

/// Minimal searchable row: one text column regardless of field name.
#[derive(Debug, Clone, PartialEq)]
struct Row(String);

impl Searchable for Row {
    fn search_text(&self, _field: &FieldName) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec("[a-z]{0,6}".prop_map(Row), 0..40)
}

fn name_field() -> Vec<FieldName> {
    vec![FieldName::new("name").unwrap()]
}

proptest! {
    /// Iterating every page exactly partitions the filtered set.
    #[test]
    fn pages_partition_filtered(data in rows(), ipp in 1usize..10, term in "[a-z]{0,2}") {
        let fields = name_field();
        let mut state = ViewState::new(ipp);
        state.set_search_term(term);

        let full = compute(&data, &fields, &state);
        let mut collected: Vec<&Row> = Vec::new();
        for page in 1..=full.total_pages {
            state.set_page(i64::try_from(page).unwrap(), full.total_pages);
            let view = compute(&data, &fields, &state);
            collected.extend(view.paginated.iter().copied());
        }
        prop_assert_eq!(collected, full.filtered);
    }

    /// A longer search term can only narrow the filtered set.
    #[test]
    fn longer_terms_filter_subsets(data in rows(), term in "[a-z]{1,4}", cut in 0usize..4) {
        let fields = name_field();
        let prefix: String = term.chars().take(cut.min(term.len())).collect();

        let mut state = ViewState::new(10);
        state.set_search_term(term);
        let narrow = compute(&data, &fields, &state);

        state.set_search_term(prefix);
        let wide = compute(&data, &fields, &state);

        for row in &narrow.filtered {
            prop_assert!(wide.filtered.iter().any(|r| std::ptr::eq(*r, *row)));
        }
    }

    /// Any requested page lands inside [1, total_pages].
    #[test]
    fn requested_pages_clamp(data in rows(), ipp in 1usize..10, requested in any::<i64>()) {
        let mut state = ViewState::new(ipp);
        let fields = name_field();

        let full = compute(&data, &fields, &state);
        state.set_page(requested, full.total_pages);
        prop_assert!(state.current_page() >= 1);
        prop_assert!(state.current_page() <= full.total_pages);

        let view = compute(&data, &fields, &state);
        prop_assert_eq!(view.current_page, state.current_page());
    }

    /// Start/end indexes always describe the returned slice.
    #[test]
    fn slice_indexes_are_consistent(data in rows(), ipp in 1usize..10, page in 1i64..20) {
        let fields = name_field();
        let mut state = ViewState::new(ipp);
        let full = compute(&data, &fields, &state);
        state.set_page(page, full.total_pages);

        let view = compute(&data, &fields, &state);
        prop_assert_eq!(view.end_index - view.start_index, view.paginated.len());
        prop_assert!(view.end_index <= view.total_items);
        prop_assert_eq!(view.total_items, view.filtered.len());
    }
}
