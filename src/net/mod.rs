//! REST API client layer: one module per backend resource plus shared
//! transport plumbing, query encoding, and wire DTOs.

pub mod appointments;
pub mod http;
pub mod lookups;
pub mod query;
pub mod services;
pub mod types;
