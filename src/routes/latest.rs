use std::sync::Arc;

use actix_web::{get, web, Responder};
use log::error;

use crate::error::ApiError;
use crate::models::responses::LatestReading;
use crate::services::reading_service::ReadingService;

/// Latest reading endpoint
#[utoipa::path(
    get,
    path = "/api/latest",
    responses(
        (status = 200, description = "Success", body = LatestReading),
        (status = 404, description = "No readings stored yet", body = String),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "Readings"
)]
#[get("/api/latest")]
pub async fn get_latest_reading(
    service: web::Data<Arc<ReadingService>>,
) -> Result<impl Responder, ApiError> {
    match service.latest_reading().await {
        Ok(latest) => Ok(web::Json(latest)),
        Err(ApiError::NoReadings) => Err(ApiError::NoReadings),
        Err(e) => {
            error!("Error fetching latest reading: {}", e);
            Err(e)
        }
    }
}
