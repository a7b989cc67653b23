//! Precipitation observation and forecast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Precipitation series for a program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Precipitation {
    pub last_updated: DateTime<Utc>,
    pub program_name: String,
    pub program_id: i32,
    pub count: usize,
    pub results: Vec<PrecipitationRecord>,
}

impl Precipitation {
    /// Attach records to a header, keeping the newest `limit` records
    /// ordered newest first.
    pub fn new(
        header: PrecipitationHeader,
        mut results: Vec<PrecipitationRecord>,
        limit: usize,
    ) -> Self {
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results.truncate(limit);
        Self {
            last_updated: header.last_updated,
            program_name: header.program_name,
            program_id: header.program_id,
            count: results.len(),
            results,
        }
    }
}

/// Header metadata for a program's weather series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PrecipitationHeader {
    pub last_updated: DateTime<Utc>,
    pub program_name: String,
    pub program_id: i32,
}

/// A single precipitation reading in millimetres
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PrecipitationRecord {
    pub timestamp: DateTime<Utc>,
    pub precipitation: f64,
    pub data_type: DataType,
}

/// Whether a reading was observed or forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Observed,
    Forecast,
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observed" => Ok(DataType::Observed),
            "forecast" => Ok(DataType::Forecast),
            other => Err(format!("unknown precipitation data type '{}'", other)),
        }
    }
}
