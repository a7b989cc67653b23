//! Query services for the Oyster Status API
//!
//! Each service composes one or more store calls for a resource under the
//! request's [`QueryDeadline`](crate::deadline::QueryDeadline) and shapes
//! the rows into response models.

pub mod harvest_area;
pub mod location;
pub mod outlook;
pub mod postgres;
pub mod store;
pub mod weather;

pub use harvest_area::HarvestAreaService;
pub use location::LocationService;
pub use outlook::OutlookService;
pub use postgres::PgStore;
pub use store::OysterStore;
pub use weather::WeatherService;
