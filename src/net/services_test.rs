use futures::executor::block_on;

use super::*;
use crate::net::http::ApiErrorKind;
use crate::session::Session;

fn payload() -> ServicePayload {
    ServicePayload {
        service_name: "X-Ray".to_owned(),
        department: "radiology".to_owned(),
        price: 450.0,
        description: String::new(),
    }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn list_endpoint_uses_default_service_ordering() {
    let query = ListQuery::first_page(DEFAULT_ORDERING);
    assert_eq!(
        list_endpoint(&query),
        "/api/services?page=1&limit=10&search=&ordering=-createdAt"
    );
}

#[test]
fn detail_endpoint_formats_id() {
    assert_eq!(detail_endpoint("s1"), "/api/services/s1");
}

// =============================================================
// Admin gate
// =============================================================

#[test]
fn admin_passes_the_gate() {
    assert!(authorize_admin(&Session::with_role("admin")).is_ok());
}

#[test]
fn non_admin_roles_fail_the_gate() {
    for role in ["doctor", "staff", "patient", ""] {
        let err = authorize_admin(&Session::with_role(role)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::AccessDenied, "role {role:?}");
    }
}

// =============================================================
// Local denial short-circuits before transport
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn create_service_by_non_admin_is_denied_without_a_request() {
    // Off-browser the transport stub answers Unavailable, so an AccessDenied
    // outcome proves no request was attempted.
    let denied = block_on(create_service(&Session::with_role("doctor"), &payload()));
    assert_eq!(denied.unwrap_err().kind, ApiErrorKind::AccessDenied);

    let reached_transport = block_on(create_service(&Session::with_role("admin"), &payload()));
    assert_eq!(reached_transport.unwrap_err().kind, ApiErrorKind::Unavailable);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn update_and_delete_follow_the_same_gate() {
    let update = block_on(update_service(&Session::with_role("staff"), "s1", &payload()));
    assert_eq!(update.unwrap_err().kind, ApiErrorKind::AccessDenied);

    let delete = block_on(delete_service(&Session::default(), "s1"));
    assert_eq!(delete.unwrap_err().kind, ApiErrorKind::AccessDenied);
}
