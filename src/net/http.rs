//! HTTP transport plumbing shared by every resource client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session's
//! bearer token attached when present.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized to an [`ApiError`] so slices can store one
//! message and views can surface it as a transient notice. A non-2xx
//! response with a server `{"message": ...}` body keeps that message; an
//! undecodable body falls back to the caller's static message. HTTP 401 is
//! fatal to the session: persisted state is purged and the browser is sent
//! to the login route.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::Session;

/// Failure classes for API calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport failed before any HTTP status was available.
    Network,
    /// The server answered with a non-success status.
    Http(u16),
    /// A success response body did not decode into the expected shape.
    Decode,
    /// The client-side role gate denied the operation before any request.
    AccessDenied,
    /// Called outside the browser (SSR build, or tests without `hydrate`).
    Unavailable,
}

/// Normalized API failure: a class plus a displayable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn access_denied(message: &str) -> Self {
        Self {
            kind: ApiErrorKind::AccessDenied,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn network(message: &str) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            kind: ApiErrorKind::Unavailable,
            message: "not available on server".to_owned(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the server's `message` from an error body, or fall back.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| fallback.to_owned());
    ApiError {
        kind: ApiErrorKind::Http(status),
        message,
    }
}

/// Purge persisted credentials and bounce to the login route.
#[cfg(feature = "hydrate")]
fn expire_session() {
    log::warn!("session expired (401); redirecting to login");
    Session::clear_persisted();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if resp.status() == 401 {
        expire_session();
        return Err(ApiError {
            kind: ApiErrorKind::Http(401),
            message: "Session expired".to_owned(),
        });
    }
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_from_body(resp.status(), &body, fallback));
    }
    resp.json::<T>().await.map_err(|_| ApiError {
        kind: ApiErrorKind::Decode,
        message: fallback.to_owned(),
    })
}

/// Issue a GET and decode the JSON response.
pub async fn get_json<T: DeserializeOwned>(
    session: &Session,
    path_and_query: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(path_and_query);
        if let Some(token) = &session.token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|_| ApiError::network(fallback))?;
        decode_response(resp, fallback).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path_and_query, fallback);
        Err(ApiError::unavailable())
    }
}

/// Issue a POST with a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    session: &Session,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(path);
        if let Some(token) = &session.token {
            req = req.header("Authorization", &bearer(token));
        }
        let req = req.json(body).map_err(|_| ApiError::network(fallback))?;
        let resp = req.send().await.map_err(|_| ApiError::network(fallback))?;
        decode_response(resp, fallback).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body, fallback);
        Err(ApiError::unavailable())
    }
}

/// Issue a PATCH with a JSON body and decode the JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    session: &Session,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::patch(path);
        if let Some(token) = &session.token {
            req = req.header("Authorization", &bearer(token));
        }
        let req = req.json(body).map_err(|_| ApiError::network(fallback))?;
        let resp = req.send().await.map_err(|_| ApiError::network(fallback))?;
        decode_response(resp, fallback).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body, fallback);
        Err(ApiError::unavailable())
    }
}

/// Issue a DELETE; the response body is discarded.
pub async fn delete(session: &Session, path: &str, fallback: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(path);
        if let Some(token) = &session.token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|_| ApiError::network(fallback))?;
        if resp.status() == 401 {
            expire_session();
            return Err(ApiError {
                kind: ApiErrorKind::Http(401),
                message: "Session expired".to_owned(),
            });
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(resp.status(), &body, fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, fallback);
        Err(ApiError::unavailable())
    }
}
