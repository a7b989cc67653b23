//! Query store abstraction
//!
//! One method per SQL statement the API issues. Handlers never see a
//! connection; they receive the store through [`crate::AppState`] and
//! compose these calls under a [`crate::deadline::QueryDeadline`].

use async_trait::async_trait;
use shared::{FloodReading, HarvestArea, Location, PrecipitationHeader, PrecipitationRecord};

use crate::error::AppResult;

#[async_trait]
pub trait OysterStore: Send + Sync {
    /// Round-trip to the database for health reporting
    async fn ping(&self) -> AppResult<()>;

    /// All production locations, ordered by program name
    async fn list_locations(&self) -> AppResult<Vec<Location>>;

    /// A single production location by program id
    async fn find_location(&self, program_id: i32) -> AppResult<Option<Location>>;

    /// Latest status row per harvest area name
    async fn list_harvest_areas(&self) -> AppResult<Vec<HarvestArea>>;

    /// A harvest area status row by its id
    async fn find_harvest_area(&self, harvest_id: i32) -> AppResult<Option<HarvestArea>>;

    /// Resolve a program id to its Food Authority program name
    async fn find_program_name(&self, program_id: i32) -> AppResult<Option<String>>;

    /// Latest status row per harvest area name within a program
    async fn list_harvest_areas_by_program(&self, program_name: &str)
        -> AppResult<Vec<HarvestArea>>;

    /// Header metadata for a program's weather series
    async fn find_precipitation_header(
        &self,
        program_id: i32,
    ) -> AppResult<Option<PrecipitationHeader>>;

    /// Most recent precipitation readings for a program, newest first
    async fn recent_precipitation(
        &self,
        program_id: i32,
        limit: u32,
    ) -> AppResult<Vec<PrecipitationRecord>>;

    /// Latest non-null normalised precipitation reading for a program
    async fn latest_flood_reading(&self, program_id: i32) -> AppResult<Option<FloodReading>>;
}
