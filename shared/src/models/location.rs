//! Production region (program) location models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An oyster production location together with its program details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Location {
    pub last_updated: DateTime<Utc>,
    pub program_info: Program,
}

/// A Food Authority oyster farming program (production region)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Program {
    pub name: String,
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub bom_info: BomStation,
}

/// Nearest Bureau of Meteorology station used as a precipitation proxy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BomStation {
    pub name: String,
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Distance from the program coordinates, in kilometres
    #[serde(rename = "distance_from_program")]
    pub distance: f64,
}
