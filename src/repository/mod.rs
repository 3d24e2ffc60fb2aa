pub mod readings;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::reading::Reading;

/// Persistence seam for readings.
///
/// The store is append-only; there is deliberately no update or delete.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Insert one document and return its store-assigned id as a hex string.
    async fn insert(&self, reading: Reading) -> Result<String, ApiError>;

    /// The most recent `limit` readings, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Reading>, ApiError>;

    /// The single most recent reading, if any.
    async fn latest(&self) -> Result<Option<Reading>, ApiError>;
}
