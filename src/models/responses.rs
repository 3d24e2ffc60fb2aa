use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::reading::Reading;

/// A stored reading as returned by the history query.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingResponse {
    #[schema(example = "665f1c2ab5f4a2d7c0a11e42")]
    pub id: String,
    #[schema(example = 1023)]
    pub fsr: i64,
    #[schema(example = "2026-08-05T12:00:00+00:00")]
    pub timestamp: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Reading> for ReadingResponse {
    fn from(reading: Reading) -> Self {
        ReadingResponse {
            id: reading.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            fsr: reading.fsr,
            timestamp: reading.timestamp,
            created_at: reading.created_at,
        }
    }
}

/// Confirmation returned to a device after a successful insert.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingCreated {
    #[schema(example = "Reading saved successfully")]
    pub message: String,
    #[schema(example = "665f1c2ab5f4a2d7c0a11e42")]
    pub id: String,
}

/// The most recent reading with its derived pressure status.
#[derive(Debug, Serialize, ToSchema)]
pub struct LatestReading {
    #[schema(example = 1023)]
    pub fsr: i64,
    #[schema(example = "Light squeeze")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
