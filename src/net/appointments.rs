//! Appointment resource client.
//!
//! One async function per REST operation. Mutations run the advisory role
//! gate first and short-circuit with an access-denied error before any
//! request leaves the client; the backend re-checks everything.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use serde::Deserialize;

use super::http::{self, ApiError};
use super::query::{self, ListQuery};
use super::types::{Appointment, AppointmentDetail, AppointmentPage, AppointmentPayload, SavedAppointment};
use crate::session::Session;

/// Default list ordering: newest appointment date first.
pub const DEFAULT_ORDERING: &str = "-appointmentDate";

const FETCH_FALLBACK: &str = "Failed to fetch appointments";
const DETAIL_FALLBACK: &str = "Appointment not found";
const CREATE_FALLBACK: &str = "Create Appointment Failed";
const UPDATE_FALLBACK: &str = "Update Appointment Failed";
const DELETE_FALLBACK: &str = "Failed to delete appointment";
const SLOTS_FALLBACK: &str = "Failed to fetch available slots";

fn list_endpoint(query: &ListQuery) -> String {
    format!("/api/appointments?{}", query.to_query_string())
}

fn detail_endpoint(id: &str) -> String {
    format!("/api/appointments/{id}")
}

fn slots_endpoint(doctor_id: &str, date: &str) -> String {
    format!(
        "/api/appointments/slots?doctorId={}&date={}",
        query::encode_component(doctor_id),
        query::encode_component(date)
    )
}

/// Gate for create/update: scheduling staff only.
fn authorize_schedule(session: &Session) -> Result<(), ApiError> {
    if session.can_schedule() {
        Ok(())
    } else {
        Err(ApiError::access_denied("Access denied: scheduling staff only"))
    }
}

/// Gate for delete: admin only.
fn authorize_delete(session: &Session) -> Result<(), ApiError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(ApiError::access_denied("Access denied: admin only"))
    }
}

/// Fetch one page of appointments.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_appointments(session: &Session, query: &ListQuery) -> Result<AppointmentPage, ApiError> {
    http::get_json(session, &list_endpoint(query), FETCH_FALLBACK).await
}

/// Fetch a single appointment by id.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_appointment_by_id(session: &Session, id: &str) -> Result<Appointment, ApiError> {
    let detail: AppointmentDetail = http::get_json(session, &detail_endpoint(id), DETAIL_FALLBACK).await?;
    Ok(detail.appointment)
}

/// Create an appointment. Denied locally for non-scheduling roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn create_appointment(session: &Session, payload: &AppointmentPayload) -> Result<Appointment, ApiError> {
    authorize_schedule(session)?;
    let saved: SavedAppointment = http::post_json(session, "/api/appointments", payload, CREATE_FALLBACK).await?;
    Ok(saved.into_record())
}

/// Update an appointment. Denied locally for non-scheduling roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn update_appointment(
    session: &Session,
    id: &str,
    payload: &AppointmentPayload,
) -> Result<Appointment, ApiError> {
    authorize_schedule(session)?;
    let saved: SavedAppointment = http::patch_json(session, &detail_endpoint(id), payload, UPDATE_FALLBACK).await?;
    Ok(saved.into_record())
}

/// Delete (cancel) an appointment. Denied locally for non-admin roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn delete_appointment(session: &Session, id: &str) -> Result<(), ApiError> {
    authorize_delete(session)?;
    http::delete(session, &detail_endpoint(id), DELETE_FALLBACK).await
}

#[derive(Debug, Default, Deserialize)]
struct SlotsResponse {
    #[serde(default)]
    slots: Vec<String>,
}

/// Available start times for a doctor on a given date.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_available_slots(session: &Session, doctor_id: &str, date: &str) -> Result<Vec<String>, ApiError> {
    let resp: SlotsResponse = http::get_json(session, &slots_endpoint(doctor_id, date), SLOTS_FALLBACK).await?;
    Ok(resp.slots)
}
