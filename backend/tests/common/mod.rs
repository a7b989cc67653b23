//! Shared fixtures for the API integration tests
//!
//! `MemoryStore` mirrors the SQL the PostgreSQL store issues (ordering,
//! limits, null filters) over in-memory rows. It counts every query and can
//! be made slow or broken to exercise deadlines and error paths.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use oyster_api::{create_app, ApiConfig, AppError, AppResult, AppState, OysterStore};
use shared::{
    BomStation, FloodReading, HarvestArea, HarvestStatus, Location, PrecipitationHeader,
    PrecipitationRecord, Program,
};
use tower::ServiceExt;

pub const CLYDE_RIVER: i32 = 5;
pub const WONBOYN_LAKE: i32 = 3;
pub const UNKNOWN_PROGRAM: i32 = 404;

/// A row of the `weather` table
#[derive(Debug, Clone)]
pub struct WeatherRow {
    pub program_id: i32,
    pub program_name: String,
    pub last_updated: DateTime<Utc>,
    pub ts: DateTime<Utc>,
    pub precipitation: Option<f64>,
    pub data_type: String,
    pub normalised_precip: Option<f64>,
}

#[derive(Default)]
pub struct MemoryStore {
    pub locations: Vec<Location>,
    pub harvest_areas: Vec<HarvestArea>,
    pub weather: Vec<WeatherRow>,
    delay: Option<Duration>,
    broken: bool,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Two programs, a harvest area history and a month of weather
    pub fn seeded() -> Self {
        let mut store = Self::default();

        store.locations = vec![
            location(WONBOYN_LAKE, "Wonboyn Lake", "Merimbula Airport", "069147"),
            location(CLYDE_RIVER, "Clyde River", "Moruya Airport", "069148"),
        ];

        store.harvest_areas = vec![
            harvest_area(1, "Clyde River", "Moonlight", "Open", day(2023, 1, 1)),
            harvest_area(2, "Clyde River", "Moonlight", "Closed", day(2023, 2, 1)),
            harvest_area(3, "Clyde River", "Waterfall", "Open", day(2023, 1, 15)),
            harvest_area(4, "Wonboyn Lake", "Wonboyn", "Closed", day(2023, 1, 20)),
            harvest_area(5, "Wonboyn Lake", "Wonboyn", "Open", day(2022, 12, 20)),
        ];

        for n in 0..25u32 {
            let ts = day(2023, 5, 1) + chrono::Duration::hours(i64::from(n) * 24);
            store.weather.push(WeatherRow {
                program_id: CLYDE_RIVER,
                program_name: "Clyde River".to_string(),
                last_updated: day(2023, 5, 20),
                ts,
                precipitation: Some(f64::from(n) * 0.5),
                data_type: if n < 18 { "observed" } else { "forecast" }.to_string(),
                // Most recent rows have no index computed yet
                normalised_precip: if n < 22 { Some(f64::from(n) / 25.0) } else { None },
            });
        }

        // A program with readings but no flood index at all
        store.weather.push(WeatherRow {
            program_id: WONBOYN_LAKE,
            program_name: "Wonboyn Lake".to_string(),
            last_updated: day(2023, 5, 20),
            ts: day(2023, 5, 19),
            precipitation: Some(3.2),
            data_type: "observed".to_string(),
            normalised_precip: None,
        });

        store
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn execute(&self) -> AppResult<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.broken {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "connection reset by peer".to_string(),
            )));
        }
        Ok(())
    }

    fn sorted_areas<'a>(&self, rows: impl Iterator<Item = &'a HarvestArea>) -> Vec<HarvestArea> {
        let mut rows: Vec<HarvestArea> = rows.cloned().collect();
        rows.sort_by(|a, b| {
            a.harvest_name
                .cmp(&b.harvest_name)
                .then(b.status.time_processed.cmp(&a.status.time_processed))
        });
        rows
    }
}

#[async_trait]
impl OysterStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        self.execute().await
    }

    async fn list_locations(&self) -> AppResult<Vec<Location>> {
        self.execute().await?;
        let mut rows = self.locations.clone();
        rows.sort_by(|a, b| a.program_info.name.cmp(&b.program_info.name));
        Ok(rows)
    }

    async fn find_location(&self, program_id: i32) -> AppResult<Option<Location>> {
        self.execute().await?;
        Ok(self
            .locations
            .iter()
            .find(|l| l.program_info.id == program_id)
            .cloned())
    }

    // Returns the full history; collapsing by name is left to the service.
    async fn list_harvest_areas(&self) -> AppResult<Vec<HarvestArea>> {
        self.execute().await?;
        Ok(self.sorted_areas(self.harvest_areas.iter()))
    }

    async fn find_harvest_area(&self, harvest_id: i32) -> AppResult<Option<HarvestArea>> {
        self.execute().await?;
        Ok(self
            .harvest_areas
            .iter()
            .find(|a| a.harvest_id == harvest_id)
            .cloned())
    }

    async fn find_program_name(&self, program_id: i32) -> AppResult<Option<String>> {
        self.execute().await?;
        Ok(self
            .locations
            .iter()
            .find(|l| l.program_info.id == program_id)
            .map(|l| l.program_info.name.clone()))
    }

    async fn list_harvest_areas_by_program(
        &self,
        program_name: &str,
    ) -> AppResult<Vec<HarvestArea>> {
        self.execute().await?;
        Ok(self.sorted_areas(
            self.harvest_areas
                .iter()
                .filter(|a| a.program_name == program_name),
        ))
    }

    async fn find_precipitation_header(
        &self,
        program_id: i32,
    ) -> AppResult<Option<PrecipitationHeader>> {
        self.execute().await?;
        Ok(self
            .weather
            .iter()
            .filter(|w| w.program_id == program_id)
            .max_by_key(|w| w.last_updated)
            .map(|w| PrecipitationHeader {
                last_updated: w.last_updated,
                program_name: w.program_name.clone(),
                program_id: w.program_id,
            }))
    }

    async fn recent_precipitation(
        &self,
        program_id: i32,
        limit: u32,
    ) -> AppResult<Vec<PrecipitationRecord>> {
        self.execute().await?;
        let mut rows: Vec<&WeatherRow> = self
            .weather
            .iter()
            .filter(|w| w.program_id == program_id && w.precipitation.is_some())
            .collect();
        rows.sort_by(|a, b| b.ts.cmp(&a.ts));

        rows.into_iter()
            .take(limit as usize)
            .map(|w| {
                Ok(PrecipitationRecord {
                    timestamp: w.ts,
                    precipitation: w.precipitation.unwrap_or_default(),
                    data_type: w.data_type.parse().map_err(AppError::Decode)?,
                })
            })
            .collect()
    }

    async fn latest_flood_reading(&self, program_id: i32) -> AppResult<Option<FloodReading>> {
        self.execute().await?;
        Ok(self
            .weather
            .iter()
            .filter(|w| w.program_id == program_id)
            .filter_map(|w| {
                w.normalised_precip.map(|index| FloodReading {
                    last_updated: w.last_updated,
                    timestamp: w.ts,
                    flood_index: index,
                })
            })
            .max_by_key(|r| r.timestamp))
    }
}

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn location(id: i32, name: &str, station: &str, station_id: &str) -> Location {
    Location {
        last_updated: day(2023, 5, 20),
        program_info: Program {
            name: name.to_string(),
            id,
            latitude: -35.7,
            longitude: 150.1,
            bom_info: BomStation {
                name: station.to_string(),
                id: station_id.to_string(),
                latitude: -35.9,
                longitude: 150.1,
                distance: 21.5,
            },
        },
    }
}

pub fn harvest_area(
    id: i32,
    program: &str,
    name: &str,
    state: &str,
    processed: DateTime<Utc>,
) -> HarvestArea {
    HarvestArea {
        last_updated: processed,
        program_name: program.to_string(),
        location_name: program.to_string(),
        harvest_name: name.to_string(),
        harvest_id: id,
        status: HarvestStatus {
            classification: "Approved".to_string(),
            state: state.to_string(),
            time_processed: processed,
            reason: format!("{} after sampling", state),
            previous_reason: String::new(),
        },
    }
}

/// Build the real router over a store, keeping a handle for assertions
pub fn app_with(store: MemoryStore, api: ApiConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let state = AppState::new(store.clone(), api);
    (create_app(state), store)
}

pub fn app(store: MemoryStore) -> (Router, Arc<MemoryStore>) {
    app_with(store, ApiConfig::default())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|_| panic!("{uri} returned non-JSON body: {}", String::from_utf8_lossy(&body)));
    (status, json)
}

pub fn text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
