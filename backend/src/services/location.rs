//! Production location lookups

use std::sync::Arc;

use shared::{ListResponse, Location};

use super::store::OysterStore;
use crate::deadline::QueryDeadline;
use crate::error::AppResult;

/// Location service for listing oyster production regions
#[derive(Clone)]
pub struct LocationService {
    store: Arc<dyn OysterStore>,
    deadline: QueryDeadline,
}

impl LocationService {
    /// Create a new LocationService instance
    pub fn new(store: Arc<dyn OysterStore>, deadline: QueryDeadline) -> Self {
        Self { store, deadline }
    }

    /// All production locations with their nearest BOM station
    pub async fn list_locations(&self) -> AppResult<ListResponse<Location>> {
        let locations = self.deadline.run(self.store.list_locations()).await?;
        Ok(ListResponse::new(locations))
    }
}
