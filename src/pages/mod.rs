//! Routed pages: list and form views for appointments and services.

pub mod appointment_form;
pub mod appointment_list;
pub mod service_form;
pub mod service_list;
