// SPDX-License-Identifier: MIT

//! Per-resource request methods.
//!
//! Each resource group is a plain collection of async functions
//! parameterized by a shared [`crate::ApiClient`]; there is no handle
//! hierarchy, and no function holds state between calls.

pub mod activities;
pub mod athletes;
pub mod clubs;
pub mod gears;
pub mod push_subscriptions;
pub mod routes;
pub mod segment_efforts;
pub mod segments;
pub mod streams;
pub mod uploads;

/// Pagination parameters shared by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub page: u32,
    /// Items per page (upstream caps this at 200)
    pub per_page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 30,
        }
    }
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Marshal into query pairs.
    pub(crate) fn query(self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_pairs() {
        let pairs = Page::new(3, 50).query();
        assert_eq!(pairs[0], ("page", "3".to_string()));
        assert_eq!(pairs[1], ("per_page", "50".to_string()));
    }

    #[test]
    fn test_page_default_matches_upstream() {
        assert_eq!(Page::default(), Page::new(1, 30));
    }
}
