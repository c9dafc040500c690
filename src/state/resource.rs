//! Per-resource list/detail slice with an async-lifecycle guard.
//!
//! DESIGN
//! ======
//! Single-writer, multi-reader: only the async flow that issued a request
//! mutates the slice, any subscribed view reads it. There is no request
//! cancellation, so every fetch carries a token from a monotonically
//! increasing counter; a slow response that lands after a newer request was
//! issued is discarded instead of clobbering fresher state.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use crate::net::query::{ListQuery, PAGE_SIZE};
use crate::net::types::{Appointment, Service};

/// Record with a backend identity, usable in a [`ResourceState`] list.
pub trait Identified {
    fn record_id(&self) -> &str;
}

impl Identified for Appointment {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Identified for Service {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// List page, single detail record, and async flags for one resource.
#[derive(Clone, Debug)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub detail: Option<T>,
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
    pub limit: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Token of the newest issued fetch; stale completions are ignored.
    latest_request: u64,
}

/// Appointment slice.
pub type AppointmentsState = ResourceState<Appointment>;
/// Service slice.
pub type ServicesState = ResourceState<Service>;

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            detail: None,
            total: 0,
            total_pages: 1,
            page: 1,
            limit: PAGE_SIZE,
            loading: false,
            error: None,
            latest_request: 0,
        }
    }
}

impl<T: Identified> ResourceState<T> {
    /// Start a fetch: flag loading, clear the last error, issue a token.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    fn is_current(&self, token: u64) -> bool {
        token == self.latest_request
    }

    /// List fulfillment. Replaces the page wholesale; `page`/`limit` echo
    /// the issuing query, never the payload.
    pub fn apply_page(&mut self, token: u64, items: Vec<T>, total: u64, total_pages: u32, query: &ListQuery) {
        if !self.is_current(token) {
            return;
        }
        self.loading = false;
        self.items = items;
        self.total = total;
        self.total_pages = total_pages;
        self.page = query.page;
        self.limit = query.limit;
    }

    /// Detail fulfillment.
    pub fn apply_detail(&mut self, token: u64, record: T) {
        if !self.is_current(token) {
            return;
        }
        self.loading = false;
        self.detail = Some(record);
    }

    /// Drop the detail record. Runs synchronously on form-route entry so a
    /// previous record never flashes while the new fetch is in flight.
    pub fn clear_detail(&mut self) {
        self.detail = None;
    }

    /// Create fulfillment: optimistic prepend at index 0. May drift from the
    /// server-side sort until the next refetch.
    pub fn apply_created(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Update fulfillment: structurally replace the matching entry, if the
    /// record is on the current page.
    pub fn apply_updated(&mut self, record: T) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.record_id() == record.record_id()) {
            *slot = record;
        }
    }

    /// Delete fulfillment: drop the matching entry.
    pub fn apply_deleted(&mut self, id: &str) {
        self.items.retain(|r| r.record_id() != id);
    }

    /// Rejection: store the message and clear loading. Stale tokens are
    /// ignored; there is no automatic retry.
    pub fn fail(&mut self, token: u64, message: String) {
        if !self.is_current(token) {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }
}
