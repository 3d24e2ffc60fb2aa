use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};

use crate::error::ApiError;
use crate::models::requests::NewReadingRequest;
use crate::models::responses::{ReadingCreated, ReadingResponse};
use crate::services::reading_service::ReadingService;

/// Reading submission endpoint
#[utoipa::path(
    post,
    path = "/api/readings",
    request_body = NewReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = ReadingCreated),
        (status = 400, description = "Missing required field or invalid JSON", body = String),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "Readings"
)]
#[post("/api/readings")]
pub async fn submit_reading(
    payload: web::Json<NewReadingRequest>,
    service: web::Data<Arc<ReadingService>>,
) -> Result<HttpResponse, ApiError> {
    store_reading(payload.into_inner(), &service).await
}

/// Reading submission endpoint under the path devices were flashed with
/// before the `/api` prefix existed. Same contract as `/api/readings`.
#[utoipa::path(
    post,
    path = "/readings",
    request_body = NewReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = ReadingCreated),
        (status = 400, description = "Missing required field or invalid JSON", body = String),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "Readings"
)]
#[post("/readings")]
pub async fn submit_reading_device(
    payload: web::Json<NewReadingRequest>,
    service: web::Data<Arc<ReadingService>>,
) -> Result<HttpResponse, ApiError> {
    store_reading(payload.into_inner(), &service).await
}

async fn store_reading(
    payload: NewReadingRequest,
    service: &ReadingService,
) -> Result<HttpResponse, ApiError> {
    // Validate before touching the store so a bad payload never writes.
    let fsr = payload.fsr.ok_or(ApiError::Validation("fsr"))?;

    match service.record_reading(fsr).await {
        Ok(created) => {
            info!("Stored reading with id {}", created.id);
            Ok(HttpResponse::Created().json(created))
        }
        Err(e) => {
            error!("Error saving reading: {}", e);
            Err(e)
        }
    }
}

/// Reading history endpoint
#[utoipa::path(
    get,
    path = "/api/readings",
    responses(
        (status = 200, description = "Success", body = Vec<ReadingResponse>),
        (status = 500, description = "Internal Server Error", body = String)
    ),
    tag = "Readings"
)]
#[get("/api/readings")]
pub async fn get_readings(
    service: web::Data<Arc<ReadingService>>,
) -> Result<impl Responder, ApiError> {
    match service.recent_readings().await {
        Ok(readings) => Ok(web::Json(readings)),
        Err(e) => {
            error!("Error fetching readings: {}", e);
            Err(e)
        }
    }
}
