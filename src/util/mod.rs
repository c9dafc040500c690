//! Shared helpers: persisted-storage access and clock/date math.

pub mod storage;
pub mod time;
