use std::sync::Arc;

use crate::error::ApiError;
use crate::models::reading::Reading;
use crate::models::responses::{LatestReading, ReadingCreated, ReadingResponse};
use crate::repository::ReadingStore;
use crate::services::status::classify;

/// Number of readings returned by the history query.
const RECENT_LIMIT: i64 = 100;

pub struct ReadingService {
    store: Arc<dyn ReadingStore>,
}

impl ReadingService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Stamp and persist one reading, returning the confirmation payload.
    pub async fn record_reading(&self, fsr: i64) -> Result<ReadingCreated, ApiError> {
        let id = self.store.insert(Reading::new(fsr)).await?;
        Ok(ReadingCreated {
            message: "Reading saved successfully".to_string(),
            id,
        })
    }

    /// The most recent readings, newest first, capped at 100.
    pub async fn recent_readings(&self) -> Result<Vec<ReadingResponse>, ApiError> {
        let readings = self.store.recent(RECENT_LIMIT).await?;
        Ok(readings.into_iter().map(ReadingResponse::from).collect())
    }

    /// The single most recent reading with its derived status.
    pub async fn latest_reading(&self) -> Result<LatestReading, ApiError> {
        let reading = self.store.latest().await?.ok_or(ApiError::NoReadings)?;
        Ok(LatestReading {
            fsr: reading.fsr,
            status: classify(reading.fsr).to_string(),
            timestamp: reading.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryStore;
    use chrono::{Duration, Utc};

    fn service_with_store() -> (Arc<InMemoryStore>, ReadingService) {
        let store = Arc::new(InMemoryStore::default());
        (store.clone(), ReadingService::new(store))
    }

    fn reading_at(fsr: i64, offset_secs: i64) -> Reading {
        let at = Utc::now() - Duration::seconds(offset_secs);
        Reading {
            id: None,
            fsr,
            timestamp: at.to_rfc3339(),
            created_at: at,
        }
    }

    #[tokio::test]
    async fn recorded_reading_comes_back_first() {
        let (_, service) = service_with_store();

        service.record_reading(100).await.unwrap();
        let created = service.record_reading(700).await.unwrap();
        assert_eq!(created.message, "Reading saved successfully");
        assert!(!created.id.is_empty());

        let readings = service.recent_readings().await.unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].fsr, 700);
        assert_eq!(readings[1].fsr, 100);
    }

    #[tokio::test]
    async fn history_is_capped_at_one_hundred() {
        let (store, service) = service_with_store();

        for i in 0..150 {
            store.insert(reading_at(i, 150 - i)).await.unwrap();
        }

        let readings = service.recent_readings().await.unwrap();
        assert_eq!(readings.len(), 100);
        // Newest first: the reading with the smallest offset leads.
        assert_eq!(readings[0].fsr, 149);
        assert_eq!(readings[99].fsr, 50);
    }

    #[tokio::test]
    async fn latest_on_empty_store_is_not_found() {
        let (_, service) = service_with_store();

        assert!(matches!(
            service.latest_reading().await,
            Err(ApiError::NoReadings)
        ));
    }

    #[tokio::test]
    async fn latest_carries_the_derived_status() {
        let (store, service) = service_with_store();

        store.insert(reading_at(30, 60)).await.unwrap();
        store.insert(reading_at(600, 0)).await.unwrap();

        let latest = service.latest_reading().await.unwrap();
        assert_eq!(latest.fsr, 600);
        assert_eq!(latest.status, "Light squeeze");
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let service = ReadingService::new(Arc::new(InMemoryStore::failing()));

        assert!(service.record_reading(1).await.is_err());
        assert!(service.recent_readings().await.is_err());
        assert!(service.latest_reading().await.is_err());
    }
}
