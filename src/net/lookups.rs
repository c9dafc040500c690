//! Lookup-list clients: label/value option sets for form dropdowns.
//!
//! Each endpoint has its own envelope quirks; the mapping into
//! [`LookupOption`] rows is kept in plain functions so the shapes stay
//! covered by tests without a browser.

#[cfg(test)]
#[path = "lookups_test.rs"]
mod lookups_test;

use serde::Deserialize;

use super::http::{self, ApiError};
use super::query::encode_component;
use super::types::LookupOption;
use crate::session::Session;

#[derive(Debug, Default, Deserialize)]
struct DoctorName {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct DoctorsResponse {
    #[serde(default)]
    doctors: Vec<DoctorName>,
}

#[derive(Debug, Default, Deserialize)]
struct PatientName {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct PatientsResponse {
    #[serde(default)]
    patients: Vec<PatientName>,
}

/// Departments arrive under `departments` or `data` depending on the route.
#[derive(Debug, Default, Deserialize)]
struct DepartmentsResponse {
    #[serde(default)]
    departments: Vec<String>,
    #[serde(default)]
    data: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceNamesResponse {
    #[serde(default)]
    services: Vec<String>,
}

fn doctor_options(rows: Vec<DoctorName>) -> Vec<LookupOption> {
    rows.into_iter()
        .map(|d| LookupOption::new(d.name.to_uppercase(), d.id))
        .collect()
}

fn patient_options(rows: Vec<PatientName>) -> Vec<LookupOption> {
    rows.into_iter().map(|p| LookupOption::new(p.name, p.id)).collect()
}

/// Controlled-vocabulary lists use the name as both label and value.
fn name_options(names: Vec<String>) -> Vec<LookupOption> {
    names.into_iter().map(|n| LookupOption::new(n.clone(), n)).collect()
}

impl DepartmentsResponse {
    fn into_names(self) -> Vec<String> {
        if self.departments.is_empty() {
            self.data
        } else {
            self.departments
        }
    }
}

/// Doctor names for the appointment form dropdown.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_doctor_names(session: &Session) -> Result<Vec<LookupOption>, ApiError> {
    let resp: DoctorsResponse = http::get_json(session, "/api/doctors/names", "Failed to load doctors").await?;
    Ok(doctor_options(resp.doctors))
}

/// Patient names for the appointment form dropdown.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_patient_names(session: &Session, search: &str) -> Result<Vec<LookupOption>, ApiError> {
    let path = format!("/api/patients/patients-names?search={}", encode_component(search));
    let resp: PatientsResponse = http::get_json(session, &path, "Failed to load patients").await?;
    Ok(patient_options(resp.patients))
}

/// Department vocabulary for the service form dropdown.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_departments(session: &Session) -> Result<Vec<LookupOption>, ApiError> {
    let resp: DepartmentsResponse = http::get_json(session, "/api/departments", "Failed to load departments").await?;
    Ok(name_options(resp.into_names()))
}

/// Service-name vocabulary for the service form dropdown.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_service_names(session: &Session) -> Result<Vec<LookupOption>, ApiError> {
    let resp: ServiceNamesResponse =
        http::get_json(session, "/api/servicenames", "Failed to load service names").await?;
    Ok(name_options(resp.services))
}
