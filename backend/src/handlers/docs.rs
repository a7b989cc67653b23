//! OpenAPI description, served with Swagger UI under `/docs`

use shared::{
    BomStation, DataType, HarvestArea, HarvestStatus, Location, Outlook, Precipitation,
    PrecipitationRecord, Program,
};
use utoipa::OpenApi;

use super::{harvest_area, health, location, outlook, weather};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NSW Oyster Status API",
        description = "Harvest area status, production regions, precipitation and flood outlook for NSW oyster growers",
        license(name = "MIT")
    ),
    paths(
        health::health_check,
        location::list_locations,
        harvest_area::list_harvest_areas,
        harvest_area::get_harvest_area,
        harvest_area::list_program_harvest_areas,
        weather::get_precipitation,
        outlook::get_outlook,
    ),
    components(schemas(
        Location,
        Program,
        BomStation,
        HarvestArea,
        HarvestStatus,
        Precipitation,
        PrecipitationRecord,
        DataType,
        Outlook,
        health::HealthResponse,
    )),
    tags(
        (name = "Oyster Production Regions", description = "Oyster production locations"),
        (name = "Oyster Harvest Areas", description = "Harvest area status from the NSW Food Authority"),
        (name = "Weather", description = "Precipitation and flood risk"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
