//! Flood risk outlook models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Location;

/// Flood risk outlook for a production region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Outlook {
    pub location: Location,
    pub last_updated: DateTime<Utc>,
    /// Time of the reading the flood index was taken from
    pub timestamp: DateTime<Utc>,
    pub flood_index: f64,
}

impl Outlook {
    pub fn new(location: Location, reading: FloodReading) -> Self {
        Self {
            location,
            last_updated: reading.last_updated,
            timestamp: reading.timestamp,
            flood_index: reading.flood_index,
        }
    }
}

/// Latest non-null normalised precipitation for a program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct FloodReading {
    pub last_updated: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
    pub flood_index: f64,
}
