use super::*;

// =============================================================
// Catalogs
// =============================================================

#[test]
fn appointment_defaults_are_a_subset_of_the_catalog() {
    for key in APPOINTMENT_DEFAULTS {
        assert!(
            APPOINTMENT_COLUMNS.iter().any(|c| c.key == *key),
            "unknown default column {key}"
        );
    }
}

#[test]
fn service_defaults_are_a_subset_of_the_catalog() {
    for key in SERVICE_DEFAULTS {
        assert!(SERVICE_COLUMNS.iter().any(|c| c.key == *key));
    }
}

#[test]
fn audit_columns_are_hidden_by_default() {
    let set = ColumnSet::new(APPOINTMENT_DEFAULTS);
    assert!(!set.is_visible("createdBy"));
    assert!(!set.is_visible("updatedBy"));
    assert!(set.is_visible("patientName"));
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_hides_then_shows() {
    let mut set = ColumnSet::new(APPOINTMENT_DEFAULTS);
    set.toggle("phone");
    assert!(!set.is_visible("phone"));
    set.toggle("phone");
    assert!(set.is_visible("phone"));
}

#[test]
fn toggle_shows_a_hidden_column() {
    let mut set = ColumnSet::new(APPOINTMENT_DEFAULTS);
    set.toggle("notes");
    assert!(set.is_visible("notes"));
}

#[test]
fn reset_restores_defaults_and_is_idempotent() {
    let mut set = ColumnSet::new(APPOINTMENT_DEFAULTS);
    set.toggle("phone");
    set.toggle("notes");
    set.reset();
    assert_eq!(set.visible_keys(), APPOINTMENT_DEFAULTS);
    set.reset();
    assert_eq!(set.visible_keys(), APPOINTMENT_DEFAULTS);
}
