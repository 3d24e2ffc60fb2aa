pub mod latest;
pub mod readings;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{get, web, Responder, ResponseError, Result};
use serde_json::json;

use crate::error::ApiError;

/// Permissive cross-origin policy. Devices and the dashboard call these
/// endpoints from arbitrary origins, and the middleware also answers the
/// OPTIONS preflight requests browsers send before a POST.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}

/// Map a body the JSON extractor cannot parse to a 400 with the usual
/// `{"error": ...}` shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, ApiError::Parse.error_response()).into()
    })
}

/// Liveness probe: answers without touching the store.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Success")
    ),
    tag = "API"
)]
#[get("/")]
pub async fn root() -> Result<impl Responder> {
    Ok(web::Json(
        json!({ "status": "ok", "message": "FSR readings API is running" }),
    ))
}
