//! List-query parameter encoding shared by the resource clients.
//!
//! DESIGN
//! ======
//! The backend takes a single sort directive wire-encoded as a signed field
//! name: a leading `-` means descending (`-appointmentDate`). Pagination is
//! page-based at a fixed page size; every page, sort, search, or date-range
//! change re-issues a full fetch built from one [`ListQuery`] value.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Fixed page size for every list view.
pub const PAGE_SIZE: u32 = 10;

/// Single-column sort directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ordering {
    pub field: String,
    pub descending: bool,
}

impl Ordering {
    #[must_use]
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            descending: false,
        }
    }

    #[must_use]
    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            descending: true,
        }
    }

    /// Parse the signed wire form: `-createdAt` is `createdAt`, descending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(raw),
        }
    }

    /// Signed wire form.
    #[must_use]
    pub fn encode(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }

    /// Header-click behavior: the same field flips direction, a new field
    /// starts ascending.
    #[must_use]
    pub fn toggled(&self, field: &str) -> Self {
        if self.field == field {
            Self {
                field: self.field.clone(),
                descending: !self.descending,
            }
        } else {
            Self::ascending(field)
        }
    }

    #[must_use]
    pub fn is_field(&self, field: &str) -> bool {
        self.field == field
    }
}

/// Query parameters for one paginated list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub ordering: Ordering,
    /// Inclusive ISO lower bound for the date-range filter.
    pub start_date: Option<String>,
    /// Inclusive ISO upper bound for the date-range filter.
    pub end_date: Option<String>,
}

impl ListQuery {
    /// Page 1 at the fixed page size in the given default ordering.
    #[must_use]
    pub fn first_page(default_ordering: &str) -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
            search: String::new(),
            ordering: Ordering::parse(default_ordering),
            start_date: None,
            end_date: None,
        }
    }

    /// `key=value&...` tail appended to a resource path.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
            format!("search={}", encode_component(&self.search)),
            format!("ordering={}", encode_component(&self.ordering.encode())),
        ];
        if let Some(start) = &self.start_date {
            parts.push(format!("startDate={}", encode_component(start)));
        }
        if let Some(end) = &self.end_date {
            parts.push(format!("endDate={}", encode_component(end)));
        }
        parts.join("&")
    }
}

/// Percent-encode a query component, keeping unreserved ASCII.
pub(crate) fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
