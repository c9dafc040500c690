use super::*;

// =============================================================
// Option mapping
// =============================================================

#[test]
fn doctor_options_uppercase_labels_and_keep_ids() {
    let rows = vec![
        DoctorName {
            id: "d1".to_owned(),
            name: "Dr. Mehta".to_owned(),
        },
        DoctorName {
            id: "d2".to_owned(),
            name: "dr. rao".to_owned(),
        },
    ];
    let options = doctor_options(rows);
    assert_eq!(options[0], LookupOption::new("DR. MEHTA", "d1"));
    assert_eq!(options[1], LookupOption::new("DR. RAO", "d2"));
}

#[test]
fn patient_options_keep_names_verbatim() {
    let rows = vec![PatientName {
        id: "p1".to_owned(),
        name: "Asha Rao".to_owned(),
    }];
    assert_eq!(patient_options(rows), vec![LookupOption::new("Asha Rao", "p1")]);
}

#[test]
fn name_options_use_name_as_label_and_value() {
    let options = name_options(vec!["cardiology".to_owned(), "radiology".to_owned()]);
    assert_eq!(options[0], LookupOption::new("cardiology", "cardiology"));
    assert_eq!(options.len(), 2);
}

// =============================================================
// Envelope tolerance
// =============================================================

#[test]
fn departments_prefer_the_named_envelope() {
    let resp: DepartmentsResponse =
        serde_json::from_str(r#"{"departments": ["cardiology"], "data": ["ignored"]}"#).expect("deserialize");
    assert_eq!(resp.into_names(), vec!["cardiology"]);
}

#[test]
fn departments_fall_back_to_data_envelope() {
    let resp: DepartmentsResponse =
        serde_json::from_str(r#"{"success": true, "data": ["radiology"]}"#).expect("deserialize");
    assert_eq!(resp.into_names(), vec!["radiology"]);
}

#[test]
fn patient_rows_read_mongo_ids() {
    let resp: PatientsResponse =
        serde_json::from_str(r#"{"patients": [{"_id": "p9", "name": "Ravi"}]}"#).expect("deserialize");
    assert_eq!(resp.patients[0].id, "p9");
}

#[test]
fn service_names_envelope_defaults_empty() {
    let resp: ServiceNamesResponse = serde_json::from_str("{}").expect("deserialize");
    assert!(resp.services.is_empty());
}
