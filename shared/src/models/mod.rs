//! Response models for the Oyster Status API

mod harvest_area;
mod location;
mod outlook;
mod precipitation;

pub use harvest_area::*;
pub use location::*;
pub use outlook::*;
pub use precipitation::*;
