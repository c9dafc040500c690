//! Service resource client. Every mutation is admin-gated client-side; the
//! backend performs the real check.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use super::http::{self, ApiError};
use super::query::ListQuery;
use super::types::{SavedService, Service, ServiceDetail, ServicePage, ServicePayload};
use crate::session::Session;

/// Default list ordering: newest service first.
pub const DEFAULT_ORDERING: &str = "-createdAt";

const FETCH_FALLBACK: &str = "Failed to fetch services";
const DETAIL_FALLBACK: &str = "Service not found";
const CREATE_FALLBACK: &str = "Create Service Failed";
const UPDATE_FALLBACK: &str = "Update Service Failed";
const DELETE_FALLBACK: &str = "Failed to delete service";

fn list_endpoint(query: &ListQuery) -> String {
    format!("/api/services?{}", query.to_query_string())
}

fn detail_endpoint(id: &str) -> String {
    format!("/api/services/{id}")
}

/// Gate for every service mutation: admin only.
fn authorize_admin(session: &Session) -> Result<(), ApiError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(ApiError::access_denied("Access denied: admin only"))
    }
}

/// Fetch one page of services.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_services(session: &Session, query: &ListQuery) -> Result<ServicePage, ApiError> {
    http::get_json(session, &list_endpoint(query), FETCH_FALLBACK).await
}

/// Fetch a single service by id.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] on transport or server failure.
pub async fn fetch_service_by_id(session: &Session, id: &str) -> Result<Service, ApiError> {
    let detail: ServiceDetail = http::get_json(session, &detail_endpoint(id), DETAIL_FALLBACK).await?;
    Ok(detail.service)
}

/// Create a service. Denied locally for non-admin roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn create_service(session: &Session, payload: &ServicePayload) -> Result<Service, ApiError> {
    authorize_admin(session)?;
    let saved: SavedService = http::post_json(session, "/api/services/create-service", payload, CREATE_FALLBACK).await?;
    Ok(saved.service)
}

/// Update a service. Denied locally for non-admin roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn update_service(session: &Session, id: &str, payload: &ServicePayload) -> Result<Service, ApiError> {
    authorize_admin(session)?;
    let saved: SavedService = http::patch_json(session, &detail_endpoint(id), payload, UPDATE_FALLBACK).await?;
    Ok(saved.service)
}

/// Delete a service. Denied locally for non-admin roles.
///
/// # Errors
///
/// Returns an access-denied [`ApiError`] before any request when the role
/// gate fails, or a normalized error from the backend.
pub async fn delete_service(session: &Session, id: &str) -> Result<(), ApiError> {
    authorize_admin(session)?;
    http::delete(session, &detail_endpoint(id), DELETE_FALLBACK).await
}
