//! Dropdown option lists shared by the form pages.
//!
//! A list is fetched at most once per mount (`needs_fetch` gates on both the
//! loading flag and a completed load), but can be seeded synchronously from a
//! record under edit so the current value renders before the fetch lands.
//! Seeding alone never marks the list loaded.

#[cfg(test)]
#[path = "lookups_test.rs"]
mod lookups_test;

use crate::net::types::LookupOption;

#[derive(Clone, Debug, Default)]
pub struct LookupList {
    pub options: Vec<LookupOption>,
    pub loading: bool,
    loaded: bool,
}

impl LookupList {
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        !self.loaded && !self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Fetch fulfillment. Seeded options absent from the server list are kept
    /// so a stale record's value stays selectable.
    pub fn fill(&mut self, fetched: Vec<LookupOption>) {
        let mut options = fetched;
        for seeded in self.options.drain(..) {
            if !options.iter().any(|o| o.value == seeded.value) {
                options.push(seeded);
            }
        }
        self.options = options;
        self.loading = false;
        self.loaded = true;
    }

    /// Insert a known option ahead of the fetch. No-op if the value is
    /// already present.
    pub fn seed(&mut self, option: LookupOption) {
        if !self.options.iter().any(|o| o.value == option.value) {
            self.options.push(option);
        }
    }

    pub fn fail(&mut self) {
        self.loading = false;
    }
}
