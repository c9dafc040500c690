//! Shared view components used by the list and form pages.

pub mod column_picker;
pub mod confirm_dialog;
pub mod notice_toast;
pub mod pagination;
