use super::*;

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_has_no_token_or_user() {
    let session = Session::default();
    assert!(session.token.is_none());
    assert!(session.user.is_none());
}

#[test]
fn session_without_user_has_no_privileges() {
    let session = Session::default();
    assert!(!session.is_admin());
    assert!(!session.can_schedule());
}

// =============================================================
// Role predicates
// =============================================================

#[test]
fn admin_role_grants_both_predicates() {
    let session = Session::with_role("admin");
    assert!(session.is_admin());
    assert!(session.can_schedule());
}

#[test]
fn role_matching_is_case_insensitive() {
    assert!(Session::with_role("Admin").is_admin());
    assert!(Session::with_role("DOCTOR").can_schedule());
}

#[test]
fn doctor_and_staff_schedule_but_are_not_admin() {
    for role in ["doctor", "staff"] {
        let session = Session::with_role(role);
        assert!(session.can_schedule(), "{role} should schedule");
        assert!(!session.is_admin(), "{role} should not be admin");
    }
}

#[test]
fn unknown_roles_get_nothing() {
    let session = Session::with_role("receptionist");
    assert!(!session.is_admin());
    assert!(!session.can_schedule());
}

// =============================================================
// SessionUser serde
// =============================================================

#[test]
fn session_user_tolerates_missing_fields() {
    let user: SessionUser = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(user.role, "");
    assert_eq!(user.name, "");
}

#[test]
fn session_user_reads_role_from_persisted_record() {
    let user: SessionUser =
        serde_json::from_str(r#"{"name":"Asha","role":"admin","email":"a@clinic.test"}"#).expect("deserialize");
    assert_eq!(user.role, "admin");
}
