use super::*;

#[test]
fn fresh_list_needs_a_fetch() {
    let list = LookupList::default();
    assert!(list.needs_fetch());
}

#[test]
fn in_flight_list_does_not_refetch() {
    let mut list = LookupList::default();
    list.begin_load();
    assert!(!list.needs_fetch());
}

#[test]
fn filled_list_does_not_refetch() {
    let mut list = LookupList::default();
    list.begin_load();
    list.fill(vec![LookupOption::new("A", "a")]);
    assert!(!list.needs_fetch());
    assert!(!list.loading);
}

#[test]
fn seeding_does_not_satisfy_the_fetch_gate() {
    let mut list = LookupList::default();
    list.seed(LookupOption::new("DR. MEHTA", "d1"));
    assert_eq!(list.options.len(), 1);
    assert!(list.needs_fetch());
}

#[test]
fn seed_skips_values_already_present() {
    let mut list = LookupList::default();
    list.seed(LookupOption::new("DR. MEHTA", "d1"));
    list.seed(LookupOption::new("dr. mehta", "d1"));
    assert_eq!(list.options.len(), 1);
}

#[test]
fn fill_keeps_seeded_options_missing_from_the_fetch() {
    let mut list = LookupList::default();
    list.seed(LookupOption::new("DR. RETIRED", "d9"));
    list.fill(vec![LookupOption::new("DR. MEHTA", "d1")]);
    assert_eq!(list.options.len(), 2);
    assert_eq!(list.options[0].value, "d1");
    assert_eq!(list.options[1].value, "d9");
}

#[test]
fn fill_drops_duplicate_seeds() {
    let mut list = LookupList::default();
    list.seed(LookupOption::new("DR. MEHTA", "d1"));
    list.fill(vec![LookupOption::new("DR. MEHTA", "d1")]);
    assert_eq!(list.options.len(), 1);
}

#[test]
fn failure_clears_loading_and_allows_retry() {
    let mut list = LookupList::default();
    list.begin_load();
    list.fail();
    assert!(list.needs_fetch());
}
