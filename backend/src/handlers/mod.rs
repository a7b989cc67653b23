//! HTTP handlers for the Oyster Status API

pub mod docs;
pub mod harvest_area;
pub mod health;
pub mod location;
pub mod outlook;
pub mod weather;

pub use docs::ApiDoc;
pub use harvest_area::{get_harvest_area, list_harvest_areas, list_program_harvest_areas};
pub use health::health_check;
pub use location::list_locations;
pub use outlook::get_outlook;
pub use weather::get_precipitation;
