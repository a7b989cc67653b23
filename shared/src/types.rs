//! Common types used across the API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counted list envelope used by every list endpoint.
///
/// `count` is derived from `results` when the envelope is built, so the two
/// can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ListResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self::new(results)
    }
}

impl<T> FromIterator<T> for ListResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
