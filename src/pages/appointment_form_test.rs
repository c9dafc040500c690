use super::*;

fn draft() -> AppointmentDraft {
    AppointmentDraft {
        patient: "p1".to_owned(),
        doctor: "d1".to_owned(),
        date: "2025-03-14".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "09:45".to_owned(),
        appointment_type: "follow-up".to_owned(),
        status: "scheduled".to_owned(),
        reason: "Knee pain".to_owned(),
        notes: "  bring previous scans  ".to_owned(),
    }
}

// =============================================================
// Payload assembly
// =============================================================

#[test]
fn valid_draft_builds_a_payload_with_derived_duration() {
    let payload = build_payload(&draft()).expect("payload");
    assert_eq!(payload.duration, 45);
    assert_eq!(payload.appointment_type, AppointmentType::FollowUp);
    assert_eq!(payload.status, AppointmentStatus::Scheduled);
    assert_eq!(payload.notes, "bring previous scans");
}

#[test]
fn unknown_type_falls_back_to_consultation() {
    let mut d = draft();
    d.appointment_type = "house-call".to_owned();
    let payload = build_payload(&d).expect("payload");
    assert_eq!(payload.appointment_type, AppointmentType::Consultation);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn missing_patient_is_rejected_first() {
    let mut d = draft();
    d.patient = "  ".to_owned();
    d.doctor = String::new();
    assert_eq!(build_payload(&d).unwrap_err(), "Select a patient.");
}

#[test]
fn missing_doctor_is_rejected() {
    let mut d = draft();
    d.doctor = String::new();
    assert_eq!(build_payload(&d).unwrap_err(), "Select a doctor.");
}

#[test]
fn empty_reason_is_accepted() {
    let mut d = draft();
    d.reason = String::new();
    let payload = build_payload(&d).expect("payload");
    assert_eq!(payload.reason, "");
}

#[test]
fn end_before_start_submits_with_zero_duration() {
    let mut d = draft();
    d.end_time = "08:30".to_owned();
    let payload = build_payload(&d).expect("payload");
    assert_eq!(payload.duration, 0);
    assert_eq!(payload.end_time, "08:30");
}

#[test]
fn zero_length_appointment_submits_with_zero_duration() {
    let mut d = draft();
    d.end_time = d.start_time.clone();
    assert_eq!(build_payload(&d).expect("payload").duration, 0);
}
