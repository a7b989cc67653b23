//! Harvest area status lookups

use std::sync::Arc;

use shared::{latest_by_harvest_name, HarvestArea, ListResponse};

use super::store::OysterStore;
use crate::deadline::QueryDeadline;
use crate::error::{AppError, AppResult};

/// Harvest area service for current harvest status
#[derive(Clone)]
pub struct HarvestAreaService {
    store: Arc<dyn OysterStore>,
    deadline: QueryDeadline,
}

impl HarvestAreaService {
    /// Create a new HarvestAreaService instance
    pub fn new(store: Arc<dyn OysterStore>, deadline: QueryDeadline) -> Self {
        Self { store, deadline }
    }

    /// Latest status of every harvest area, one entry per harvest name
    pub async fn list_harvest_areas(&self) -> AppResult<ListResponse<HarvestArea>> {
        let rows = self.deadline.run(self.store.list_harvest_areas()).await?;
        Ok(latest_by_harvest_name(rows))
    }

    /// A single harvest area by id
    pub async fn get_harvest_area(&self, harvest_id: i32) -> AppResult<HarvestArea> {
        self.deadline
            .run(self.store.find_harvest_area(harvest_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("harvest area {}", harvest_id)))
    }

    /// Latest status of every harvest area within a program.
    ///
    /// The program is resolved first; an unknown program id is reported as
    /// not found without querying harvest areas.
    pub async fn list_by_program(&self, program_id: i32) -> AppResult<ListResponse<HarvestArea>> {
        let program_name = self
            .deadline
            .run(self.store.find_program_name(program_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("program {}", program_id)))?;

        tracing::debug!(program_id, %program_name, "Resolved program");

        let rows = self
            .deadline
            .run(self.store.list_harvest_areas_by_program(&program_name))
            .await?;

        Ok(latest_by_harvest_name(rows))
    }
}
