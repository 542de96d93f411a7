//! Scenario tests for the collection view engine.

use backoffice_model::{FieldName, FieldValue, Record};
use backoffice_view::{CollectionView, ViewState, compute};

fn named_record(name: &str) -> Record {
    let mut record = Record::new();
    record.insert(
        FieldName::new("nombre").unwrap(),
        FieldValue::Text(name.to_string()),
    );
    record
}

fn numbered_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut record = Record::new();
            record.insert(FieldName::new("id").unwrap(), FieldValue::Number(i as f64));
            record
        })
        .collect()
}

#[test]
fn twenty_three_records_make_three_pages_of_ten() {
    let data = numbered_records(23);
    let mut state = ViewState::new(10);

    let page1 = compute(&data, &[], &state);
    assert_eq!(page1.total_items, 23);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(page1.paginated.len(), 10);
    assert_eq!(page1.start_index, 0);
    assert_eq!(page1.end_index, 10);

    state.set_page(3, page1.total_pages);
    let page3 = compute(&data, &[], &state);
    assert_eq!(page3.paginated.len(), 3);
    assert_eq!(page3.start_index, 20);
    assert_eq!(page3.end_index, 23);
}

#[test]
fn search_is_case_insensitive_substring() {
    let data = vec![
        named_record("Maíz"),
        named_record("Arroz"),
        named_record("Trigo"),
    ];
    let fields = vec![FieldName::new("nombre").unwrap()];
    let mut state = ViewState::new(10);
    state.set_search_term("arr");

    let result = compute(&data, &fields, &state);
    assert_eq!(result.filtered, vec![&data[1]]);

    state.set_search_term("ARR");
    let result = compute(&data, &fields, &state);
    assert_eq!(result.filtered, vec![&data[1]]);
}

#[test]
fn empty_search_fields_disable_filtering() {
    let data = vec![named_record("Maíz"), named_record("Arroz")];
    let mut state = ViewState::new(10);
    state.set_search_term("zzz");

    let result = compute(&data, &[], &state);
    assert_eq!(result.total_items, 2);
}

#[test]
fn missing_field_values_match_as_empty() {
    let data = vec![named_record("Arroz"), Record::new()];
    let fields = vec![FieldName::new("nombre").unwrap()];
    let mut state = ViewState::new(10);
    state.set_search_term("arroz");

    let result = compute(&data, &fields, &state);
    assert_eq!(result.total_items, 1);
}

#[test]
fn new_search_term_resets_to_first_page() {
    let data = numbered_records(60);
    let mut view = CollectionView::new(vec![FieldName::new("id").unwrap()], 10);

    let result = view.recompute(&data);
    view.set_page(5, result.total_pages);
    assert_eq!(view.state().current_page(), 5);

    view.set_search_term("x");
    assert_eq!(view.state().current_page(), 1);
    let result = view.recompute(&data);
    assert_eq!(result.current_page, 1);
}

#[test]
fn page_clamps_when_filtered_set_shrinks() {
    let data = numbered_records(50);
    let mut state = ViewState::new(10);
    state.set_page(5, 5);

    let shrunk = numbered_records(7);
    let result = compute(&shrunk, &[], &state);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.current_page, 1);
    assert_eq!(result.paginated.len(), 7);
}

#[test]
fn empty_data_yields_one_empty_page() {
    let data: Vec<Record> = Vec::new();
    let state = ViewState::new(10);

    let result = compute(&data, &[], &state);
    assert_eq!(result.total_items, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.current_page, 1);
    assert!(result.paginated.is_empty());
    assert_eq!(result.start_index, 0);
    assert_eq!(result.end_index, 0);
}

#[test]
fn deserialized_state_restores_invariants() {
    // A stored snapshot with zeroed fields must come back clamped, not
    // primed to divide by zero inside compute.
    let state: ViewState =
        serde_json::from_str(r#"{"search_term":"","current_page":0,"items_per_page":0}"#)
            .expect("deserialize state");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.items_per_page(), 1);

    let data = numbered_records(3);
    let result = compute(&data, &[], &state);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.paginated.len(), 1);
}

#[test]
fn state_serialization_round_trip() {
    let mut state = ViewState::new(25);
    state.set_search_term("arroz");
    state.set_page(4, 9);

    let json = serde_json::to_string(&state).expect("serialize state");
    let round: ViewState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}

#[test]
fn compute_is_deterministic() {
    let data = vec![
        named_record("Maíz"),
        named_record("Arroz"),
        named_record("Trigo"),
    ];
    let fields = vec![FieldName::new("nombre").unwrap()];
    let mut state = ViewState::new(2);
    state.set_search_term("r");

    let first = compute(&data, &fields, &state);
    let second = compute(&data, &fields, &state);
    assert_eq!(first, second);
}
