//! Backend DTOs for the appointment and service modules.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads; the client never owns the records.
//! Field names follow the wire (camelCase, Mongo-style `_id`), and
//! `#[serde(default)]` keeps deserialization tolerant where the backend is
//! loose about optional fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Appointment categories offered by the clinic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    #[default]
    Consultation,
    FollowUp,
    CheckUp,
    Procedure,
    Other,
}

impl AppointmentType {
    pub const ALL: [Self; 5] = [
        Self::Consultation,
        Self::FollowUp,
        Self::CheckUp,
        Self::Procedure,
        Self::Other,
    ];

    /// Wire value, also used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consultation => "consultation",
            Self::FollowUp => "follow-up",
            Self::CheckUp => "check-up",
            Self::Procedure => "procedure",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Consultation => "Consultation",
            Self::FollowUp => "Follow-Up",
            Self::CheckUp => "Check-Up",
            Self::Procedure => "Procedure",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Appointment lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Completed, Self::Cancelled, Self::NoShow];

    /// Wire value, also used as the `<select>` option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no-show",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No Show",
        }
    }

    /// Tone suffix for the status tag's CSS class.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            Self::Scheduled => "blue",
            Self::Completed => "green",
            Self::Cancelled => "red",
            Self::NoShow => "orange",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Patient reference embedded in an appointment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl PatientRef {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Doctor reference embedded in an appointment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Audit stamp: who created or last updated the record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRef {
    #[serde(default)]
    pub name: String,
}

/// An appointment as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient: PatientRef,
    #[serde(default)]
    pub doctor: DoctorRef,
    pub appointment_date: String,
    pub start_time: String,
    pub end_time: String,
    /// Minutes; derived client-side on submission, not authoritative.
    #[serde(default)]
    pub duration: i32,
    #[serde(rename = "type", default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_by: Option<AuditRef>,
    #[serde(default)]
    pub updated_by: Option<AuditRef>,
}

/// A clinic service as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
}

/// Create/update body for an appointment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    /// Patient id.
    pub patient: String,
    /// Doctor id.
    pub doctor: String,
    pub appointment_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: i32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub reason: String,
    pub notes: String,
}

/// Create/update body for a service. Price is already coerced numeric.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub service_name: String,
    pub department: String,
    pub price: f64,
    pub description: String,
}

/// `GET /api/appointments` page envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPage {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

/// `GET /api/services` page envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePage {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// `GET /api/appointments/:id` envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
}

/// `GET /api/services/:id` envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceDetail {
    pub service: Service,
}

/// Create/update response for appointments. Routes answer with `{data}`,
/// `{appointment}`, or the bare record; untagged variants cover all three.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SavedAppointment {
    Data { data: Appointment },
    Named { appointment: Appointment },
    Bare(Appointment),
}

impl SavedAppointment {
    #[must_use]
    pub fn into_record(self) -> Appointment {
        match self {
            Self::Data { data } => data,
            Self::Named { appointment } => appointment,
            Self::Bare(record) => record,
        }
    }
}

/// Create/update response for services.
#[derive(Clone, Debug, Deserialize)]
pub struct SavedService {
    pub service: Service,
}

/// Label/value pair for a selection control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub label: String,
    pub value: String,
}

impl LookupOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
