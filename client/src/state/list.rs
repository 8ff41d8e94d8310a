//! Fetch state for a view that lists backend records.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::error::ApiResult;

/// Items plus the loading/error flags every list view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    /// Mark a fetch in flight. Existing items stay visible until it settles.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result; failures keep the previous items.
    pub fn settle(&mut self, result: ApiResult<Vec<T>>, fallback: &str) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message(fallback)),
        }
    }
}
