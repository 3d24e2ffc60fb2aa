use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// One stored sensor sample.
///
/// Documents are append-only: nothing in this crate updates or deletes a
/// reading after insertion, and duplicates at the same instant are legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub fsr: i64,
    /// ISO-8601 wall-clock stamp recorded at ingest.
    pub timestamp: String,
    /// Server-assigned insertion time; the sole ordering key.
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Reading {
    /// Stamp a raw sensor value with the current server time.
    pub fn new(fsr: i64) -> Self {
        let now = Utc::now();
        Reading {
            id: None,
            fsr,
            timestamp: now.to_rfc3339(),
            created_at: now,
        }
    }
}
