//! Harvest area status models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::ListResponse;

/// A harvest area and its latest regulatory status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HarvestArea {
    pub last_updated: DateTime<Utc>,
    pub program_name: String,
    pub location_name: String,
    pub harvest_name: String,
    pub harvest_id: i32,
    pub status: HarvestStatus,
}

/// Harvest status as published by the NSW Food Authority
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HarvestStatus {
    pub classification: String,
    /// Open, closed, conditional etc.
    pub state: String,
    pub time_processed: DateTime<Utc>,
    pub reason: String,
    pub previous_reason: String,
}

/// Collapse harvest area rows to one entry per harvest name, keeping the
/// most recently processed status. Output is ordered by harvest name.
pub fn latest_by_harvest_name(rows: Vec<HarvestArea>) -> ListResponse<HarvestArea> {
    let mut latest: BTreeMap<String, HarvestArea> = BTreeMap::new();

    for row in rows {
        let newer = latest
            .get(&row.harvest_name)
            .map_or(true, |kept| row.status.time_processed > kept.status.time_processed);
        if newer {
            latest.insert(row.harvest_name.clone(), row);
        }
    }

    latest.into_values().collect()
}
