//! Table column catalogs and per-table visibility state.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

/// One selectable table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
}

/// Every column the appointment table can render.
pub const APPOINTMENT_COLUMNS: &[Column] = &[
    Column { key: "patientName", title: "Patient" },
    Column { key: "date", title: "Date" },
    Column { key: "time", title: "Time" },
    Column { key: "doctorId", title: "Doctor" },
    Column { key: "type", title: "Type" },
    Column { key: "status", title: "Status" },
    Column { key: "reason", title: "Reason" },
    Column { key: "notes", title: "Notes" },
    Column { key: "phone", title: "Phone" },
    Column { key: "createdBy", title: "Created By" },
    Column { key: "updatedBy", title: "Updated By" },
];

/// Columns shown before the user touches the picker.
pub const APPOINTMENT_DEFAULTS: &[&str] = &[
    "date",
    "time",
    "patientName",
    "doctorId",
    "reason",
    "type",
    "status",
    "phone",
];

pub const SERVICE_COLUMNS: &[Column] = &[
    Column { key: "serviceName", title: "Service" },
    Column { key: "department", title: "Department" },
    Column { key: "price", title: "Price" },
    Column { key: "description", title: "Description" },
    Column { key: "createdAt", title: "Created" },
];

pub const SERVICE_DEFAULTS: &[&str] = &[
    "serviceName",
    "department",
    "price",
    "description",
    "createdAt",
];

/// Visible-column set for one table. Session-local only.
#[derive(Clone, Debug)]
pub struct ColumnSet {
    defaults: &'static [&'static str],
    visible: Vec<&'static str>,
}

impl ColumnSet {
    #[must_use]
    pub fn new(defaults: &'static [&'static str]) -> Self {
        Self {
            defaults,
            visible: defaults.to_vec(),
        }
    }

    #[must_use]
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(&key)
    }

    /// Flip one column. Catalog order is preserved by membership, not by
    /// toggle order, so the caller renders from the catalog and filters here.
    pub fn toggle(&mut self, key: &'static str) {
        if let Some(at) = self.visible.iter().position(|k| *k == key) {
            self.visible.remove(at);
        } else {
            self.visible.push(key);
        }
    }

    /// Restore the default set. Idempotent.
    pub fn reset(&mut self) {
        self.visible = self.defaults.to_vec();
    }

    #[must_use]
    pub fn visible_keys(&self) -> &[&'static str] {
        &self.visible
    }
}
