//! Application state: per-resource slices and local UI chrome.

pub mod columns;
pub mod lookups;
pub mod resource;
pub mod ui;
