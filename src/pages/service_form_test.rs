use super::*;

fn draft() -> ServiceDraft {
    ServiceDraft {
        service_name: "X-Ray".to_owned(),
        department: "radiology".to_owned(),
        price: " 450.50 ".to_owned(),
        description: "Standard radiograph".to_owned(),
    }
}

#[test]
fn valid_draft_coerces_price_to_a_number() {
    let payload = build_payload(&draft()).expect("payload");
    assert!((payload.price - 450.50).abs() < f64::EPSILON);
    assert_eq!(payload.service_name, "X-Ray");
}

#[test]
fn non_numeric_price_is_rejected() {
    let mut d = draft();
    d.price = "free".to_owned();
    assert_eq!(build_payload(&d).unwrap_err(), "Price must be a number.");
}

#[test]
fn empty_price_is_rejected() {
    let mut d = draft();
    d.price = String::new();
    assert!(build_payload(&d).is_err());
}

#[test]
fn negative_price_is_rejected() {
    let mut d = draft();
    d.price = "-5".to_owned();
    assert_eq!(build_payload(&d).unwrap_err(), "Price must be zero or more.");
}

#[test]
fn zero_price_is_allowed() {
    let mut d = draft();
    d.price = "0".to_owned();
    assert!((build_payload(&d).expect("payload").price).abs() < f64::EPSILON);
}

#[test]
fn missing_name_is_rejected_before_department() {
    let mut d = draft();
    d.service_name = "  ".to_owned();
    d.department = String::new();
    assert_eq!(build_payload(&d).unwrap_err(), "Select a service name.");
}
