use serde::Deserialize;
use utoipa::ToSchema;

/// Ingestion payload sent by a device.
///
/// `fsr` is optional at the serde layer so an absent field surfaces as a
/// validation error with its own message instead of a deserialization
/// failure. Unknown extra fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewReadingRequest {
    #[schema(example = 1023)]
    pub fsr: Option<i64>,
}
