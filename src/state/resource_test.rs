use super::*;
use crate::net::query::ListQuery;

fn service(id: &str, name: &str) -> Service {
    Service {
        id: id.to_owned(),
        service_name: name.to_owned(),
        department: "radiology".to_owned(),
        price: 100.0,
        description: String::new(),
        created_at: "2025-03-01T00:00:00.000Z".to_owned(),
    }
}

fn loaded_state(ids: &[&str]) -> ServicesState {
    let mut state = ServicesState::default();
    let token = state.begin_request();
    let items = ids.iter().map(|id| service(id, "X-Ray")).collect();
    let query = ListQuery::first_page("-createdAt");
    state.apply_page(token, items, ids.len() as u64, 1, &query);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ServicesState::default();
    assert!(state.items.is_empty());
    assert!(state.detail.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.page, 1);
    assert_eq!(state.limit, 10);
    assert_eq!(state.total_pages, 1);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_request_sets_loading_and_clears_error() {
    let mut state = ServicesState::default();
    state.error = Some("old".to_owned());
    let token = state.begin_request();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(token, 1);
}

#[test]
fn page_and_limit_echo_the_issuing_query_not_the_payload() {
    let mut state = ServicesState::default();
    let token = state.begin_request();
    let mut query = ListQuery::first_page("-createdAt");
    query.page = 2;
    query.limit = 10;
    // total/totalPages come from the response; page/limit never do.
    state.apply_page(token, vec![service("s11", "MRI")], 15, 2, &query);
    assert_eq!(state.page, 2);
    assert_eq!(state.limit, 10);
    assert_eq!(state.total, 15);
    assert_eq!(state.total_pages, 2);
    assert!(!state.loading);
}

#[test]
fn fulfillment_replaces_the_list_wholesale() {
    let mut state = loaded_state(&["s1", "s2"]);
    let token = state.begin_request();
    let query = ListQuery::first_page("-createdAt");
    state.apply_page(token, vec![service("s3", "CT")], 1, 1, &query);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "s3");
}

#[test]
fn rejection_stores_message_and_clears_loading() {
    let mut state = ServicesState::default();
    let token = state.begin_request();
    state.fail(token, "Failed to fetch services".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch services"));
}

// =============================================================
// Stale-token discard
// =============================================================

#[test]
fn stale_fulfillment_is_discarded() {
    let mut state = ServicesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    let query = ListQuery::first_page("-createdAt");

    // Newer request lands first.
    state.apply_page(second, vec![service("new", "MRI")], 1, 1, &query);
    // The slow first response must not clobber it.
    state.apply_page(first, vec![service("old", "X-Ray")], 1, 1, &query);

    assert_eq!(state.items[0].id, "new");
}

#[test]
fn stale_rejection_is_discarded() {
    let mut state = ServicesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    let query = ListQuery::first_page("-createdAt");
    state.apply_page(second, vec![service("s1", "MRI")], 1, 1, &query);
    state.fail(first, "timeout".to_owned());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn stale_detail_is_discarded() {
    let mut state = ServicesState::default();
    let first = state.begin_request();
    let second = state.begin_request();
    state.apply_detail(second, service("s2", "MRI"));
    state.apply_detail(first, service("s1", "X-Ray"));
    assert_eq!(state.detail.as_ref().map(|s| s.id.as_str()), Some("s2"));
}

// =============================================================
// Detail lifecycle
// =============================================================

#[test]
fn detail_fulfillment_replaces_the_record() {
    let mut state = ServicesState::default();
    let token = state.begin_request();
    state.apply_detail(token, service("s1", "X-Ray"));
    assert!(state.detail.is_some());
    assert!(!state.loading);
}

#[test]
fn clear_detail_drops_the_record_synchronously() {
    let mut state = ServicesState::default();
    let token = state.begin_request();
    state.apply_detail(token, service("s1", "X-Ray"));
    state.clear_detail();
    assert!(state.detail.is_none());
}

// =============================================================
// Mutation fulfillments
// =============================================================

#[test]
fn create_prepends_exactly_one_record_at_index_zero() {
    let mut state = loaded_state(&["s1", "s2"]);
    state.apply_created(service("s3", "ECG"));
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[0].id, "s3");
}

#[test]
fn update_replaces_matching_record_without_changing_length() {
    let mut state = loaded_state(&["s1", "s2"]);
    state.apply_updated(service("s2", "Ultrasound"));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].service_name, "Ultrasound");
}

#[test]
fn update_of_absent_record_is_a_no_op() {
    let mut state = loaded_state(&["s1"]);
    state.apply_updated(service("s9", "Ultrasound"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "s1");
}

#[test]
fn delete_removes_the_matching_record() {
    let mut state = loaded_state(&["s1", "s2", "s3"]);
    state.apply_deleted("s2");
    assert_eq!(state.items.len(), 2);
    assert!(state.items.iter().all(|s| s.id != "s2"));
}

#[test]
fn delete_of_absent_record_leaves_length_unchanged() {
    let mut state = loaded_state(&["s1"]);
    state.apply_deleted("s9");
    assert_eq!(state.items.len(), 1);
}
