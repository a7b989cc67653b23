//! PostgreSQL implementation of [`OysterStore`]
//!
//! Every statement is parameterized; sqlx prepares and caches each one per
//! pooled connection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{
    BomStation, DataType, FloodReading, HarvestArea, HarvestStatus, Location,
    PrecipitationHeader, PrecipitationRecord, Program,
};
use sqlx::PgPool;

use super::store::OysterStore;
use crate::error::{AppError, AppResult};

/// Store backed by a bounded PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Database row from `harvest_lookup`
#[derive(Debug, Clone, sqlx::FromRow)]
struct LocationRow {
    last_updated: DateTime<Utc>,
    fa_program_name: String,
    fa_program_id: i32,
    ww_latitude: f64,
    ww_longitude: f64,
    bom_location: String,
    bom_location_id: String,
    bom_latitude: f64,
    bom_longitude: f64,
    bom_distance: f64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            last_updated: row.last_updated,
            program_info: Program {
                name: row.fa_program_name,
                id: row.fa_program_id,
                latitude: row.ww_latitude,
                longitude: row.ww_longitude,
                bom_info: BomStation {
                    name: row.bom_location,
                    id: row.bom_location_id,
                    latitude: row.bom_latitude,
                    longitude: row.bom_longitude,
                    distance: row.bom_distance,
                },
            },
        }
    }
}

/// Database row from `harvest_area`
#[derive(Debug, Clone, sqlx::FromRow)]
struct HarvestAreaRow {
    last_updated: DateTime<Utc>,
    program_name: String,
    location: String,
    name: String,
    id: i32,
    classification: String,
    status: String,
    time_processed: DateTime<Utc>,
    status_reason: String,
    status_prev_reason: String,
}

impl From<HarvestAreaRow> for HarvestArea {
    fn from(row: HarvestAreaRow) -> Self {
        Self {
            last_updated: row.last_updated,
            program_name: row.program_name,
            location_name: row.location,
            harvest_name: row.name,
            harvest_id: row.id,
            status: HarvestStatus {
                classification: row.classification,
                state: row.status,
                time_processed: row.time_processed,
                reason: row.status_reason,
                previous_reason: row.status_prev_reason,
            },
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct PrecipitationHeaderRow {
    last_updated: DateTime<Utc>,
    program_name: String,
    program_id: i32,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct PrecipitationRow {
    ts: DateTime<Utc>,
    precipitation: f64,
    data_type: String,
}

impl TryFrom<PrecipitationRow> for PrecipitationRecord {
    type Error = AppError;

    fn try_from(row: PrecipitationRow) -> Result<Self, Self::Error> {
        let data_type: DataType = row.data_type.parse().map_err(AppError::Decode)?;
        Ok(Self {
            timestamp: row.ts,
            precipitation: row.precipitation,
            data_type,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct FloodRow {
    last_updated: DateTime<Utc>,
    ts: DateTime<Utc>,
    normalised_precip: f64,
}

#[async_trait]
impl OysterStore for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT last_updated, fa_program_name, fa_program_id, ww_latitude, ww_longitude,
                   bom_location, bom_location_id, bom_latitude, bom_longitude, bom_distance
            FROM harvest_lookup
            ORDER BY fa_program_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn find_location(&self, program_id: i32) -> AppResult<Option<Location>> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT last_updated, fa_program_name, fa_program_id, ww_latitude, ww_longitude,
                   bom_location, bom_location_id, bom_latitude, bom_longitude, bom_distance
            FROM harvest_lookup
            WHERE fa_program_id = $1
            LIMIT 1
            "#,
        )
        .bind(program_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Location::from))
    }

    async fn list_harvest_areas(&self) -> AppResult<Vec<HarvestArea>> {
        let rows = sqlx::query_as::<_, HarvestAreaRow>(
            r#"
            SELECT DISTINCT ON (name)
                   last_updated, program_name, location, name, id, classification, status,
                   time_processed, status_reason, status_prev_reason
            FROM harvest_area
            ORDER BY name, time_processed DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(HarvestArea::from).collect())
    }

    async fn find_harvest_area(&self, harvest_id: i32) -> AppResult<Option<HarvestArea>> {
        let row = sqlx::query_as::<_, HarvestAreaRow>(
            r#"
            SELECT last_updated, program_name, location, name, id, classification, status,
                   time_processed, status_reason, status_prev_reason
            FROM harvest_area
            WHERE id = $1
            "#,
        )
        .bind(harvest_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(HarvestArea::from))
    }

    async fn find_program_name(&self, program_id: i32) -> AppResult<Option<String>> {
        let name = sqlx::query_scalar::<_, String>(
            "SELECT fa_program_name FROM harvest_lookup WHERE fa_program_id = $1 LIMIT 1",
        )
        .bind(program_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(name)
    }

    async fn list_harvest_areas_by_program(
        &self,
        program_name: &str,
    ) -> AppResult<Vec<HarvestArea>> {
        let rows = sqlx::query_as::<_, HarvestAreaRow>(
            r#"
            SELECT DISTINCT ON (name)
                   last_updated, program_name, location, name, id, classification, status,
                   time_processed, status_reason, status_prev_reason
            FROM harvest_area
            WHERE program_name = $1
            ORDER BY name, time_processed DESC
            "#,
        )
        .bind(program_name)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(HarvestArea::from).collect())
    }

    async fn find_precipitation_header(
        &self,
        program_id: i32,
    ) -> AppResult<Option<PrecipitationHeader>> {
        let row = sqlx::query_as::<_, PrecipitationHeaderRow>(
            r#"
            SELECT last_updated, program_name, program_id
            FROM weather
            WHERE program_id = $1
            ORDER BY last_updated DESC
            LIMIT 1
            "#,
        )
        .bind(program_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|row| PrecipitationHeader {
            last_updated: row.last_updated,
            program_name: row.program_name,
            program_id: row.program_id,
        }))
    }

    async fn recent_precipitation(
        &self,
        program_id: i32,
        limit: u32,
    ) -> AppResult<Vec<PrecipitationRecord>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            r#"
            SELECT ts, precipitation, data_type
            FROM weather
            WHERE program_id = $1 AND precipitation IS NOT NULL
            ORDER BY ts DESC
            LIMIT $2
            "#,
        )
        .bind(program_id)
        .bind(i64::from(limit))
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(PrecipitationRecord::try_from).collect()
    }

    async fn latest_flood_reading(&self, program_id: i32) -> AppResult<Option<FloodReading>> {
        let row = sqlx::query_as::<_, FloodRow>(
            r#"
            SELECT last_updated, ts, normalised_precip
            FROM weather
            WHERE program_id = $1 AND normalised_precip IS NOT NULL
            ORDER BY ts DESC
            LIMIT 1
            "#,
        )
        .bind(program_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|row| FloodReading {
            last_updated: row.last_updated,
            timestamp: row.ts,
            flood_index: row.normalised_precip,
        }))
    }
}
