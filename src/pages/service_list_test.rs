use super::*;

fn service() -> Service {
    Service {
        id: "s1".to_owned(),
        service_name: "X-Ray".to_owned(),
        department: "radiology".to_owned(),
        price: 450.0,
        description: "Standard radiograph".to_owned(),
        created_at: "2025-02-01T08:30:00.000Z".to_owned(),
    }
}

#[test]
fn price_cell_renders_two_decimals_with_currency() {
    assert_eq!(cell_text(&service(), "price"), "\u{20b9}450.00");
}

#[test]
fn fractional_price_keeps_its_cents() {
    assert_eq!(format_price(99.5), "\u{20b9}99.50");
}

#[test]
fn created_cell_renders_the_day() {
    assert_eq!(cell_text(&service(), "createdAt"), "01/02/2025");
}

#[test]
fn name_and_department_render_verbatim() {
    assert_eq!(cell_text(&service(), "serviceName"), "X-Ray");
    assert_eq!(cell_text(&service(), "department"), "radiology");
}

#[test]
fn price_and_created_are_sortable() {
    assert_eq!(sort_field("price"), Some("price"));
    assert_eq!(sort_field("createdAt"), Some("createdAt"));
    assert_eq!(sort_field("serviceName"), None);
}
