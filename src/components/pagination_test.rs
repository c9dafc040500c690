use super::*;

#[test]
fn fifteen_records_at_ten_per_page_is_two_pages() {
    assert_eq!(page_count(15, 10), 2);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    assert_eq!(page_count(20, 10), 2);
}

#[test]
fn empty_list_still_shows_one_page() {
    assert_eq!(page_count(0, 10), 1);
}

#[test]
fn zero_limit_does_not_divide_by_zero() {
    assert_eq!(page_count(15, 0), 1);
}

#[test]
fn single_record_is_one_page() {
    assert_eq!(page_count(1, 10), 1);
}
