//! Precipitation series lookups

use std::sync::Arc;

use shared::Precipitation;

use super::store::OysterStore;
use crate::deadline::QueryDeadline;
use crate::error::{AppError, AppResult};

/// Weather service for observed and forecast precipitation
#[derive(Clone)]
pub struct WeatherService {
    store: Arc<dyn OysterStore>,
    deadline: QueryDeadline,
    page_size: u32,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(store: Arc<dyn OysterStore>, deadline: QueryDeadline, page_size: u32) -> Self {
        Self {
            store,
            deadline,
            page_size,
        }
    }

    /// Most recent precipitation readings for a program, newest first and
    /// bounded by the configured page size
    pub async fn get_precipitation(&self, program_id: i32) -> AppResult<Precipitation> {
        let header = self
            .deadline
            .run(self.store.find_precipitation_header(program_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("weather for program {}", program_id)))?;

        let records = self
            .deadline
            .run(self.store.recent_precipitation(program_id, self.page_size))
            .await?;

        Ok(Precipitation::new(header, records, self.page_size as usize))
    }
}
