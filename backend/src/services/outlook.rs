//! Flood risk outlook

use std::sync::Arc;

use shared::Outlook;

use super::store::OysterStore;
use crate::deadline::QueryDeadline;
use crate::error::{AppError, AppResult};

/// Outlook service combining program metadata with the latest flood index
#[derive(Clone)]
pub struct OutlookService {
    store: Arc<dyn OysterStore>,
    deadline: QueryDeadline,
}

impl OutlookService {
    /// Create a new OutlookService instance
    pub fn new(store: Arc<dyn OysterStore>, deadline: QueryDeadline) -> Self {
        Self { store, deadline }
    }

    /// Flood risk outlook for a program. Both the program and a non-null
    /// flood reading must exist.
    pub async fn get_outlook(&self, program_id: i32) -> AppResult<Outlook> {
        let location = self
            .deadline
            .run(self.store.find_location(program_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("program {}", program_id)))?;

        let reading = self
            .deadline
            .run(self.store.latest_flood_reading(program_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("flood index for program {}", program_id)))?;

        Ok(Outlook::new(location, reading))
    }
}
