//! In-memory store for service and route tests.
//!
//! Mirrors the sort and limit contract of the Mongo queries: newest first by
//! `createdAt`, ties broken by insertion order (later insert wins).

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;
use crate::models::reading::Reading;
use crate::repository::ReadingStore;

#[derive(Default)]
pub struct InMemoryStore {
    readings: Mutex<Vec<Reading>>,
    fail: bool,
}

impl InMemoryStore {
    /// A store whose every operation fails, for exercising the 500 paths.
    pub fn failing() -> Self {
        InMemoryStore {
            readings: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail {
            Err(ApiError::Configuration("store offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn sorted_desc(&self) -> Vec<Reading> {
        let readings = self.readings.lock().unwrap();
        let mut indexed: Vec<(usize, Reading)> = readings.iter().cloned().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            (b.created_at, ib).cmp(&(a.created_at, ia))
        });
        indexed.into_iter().map(|(_, reading)| reading).collect()
    }
}

#[async_trait]
impl ReadingStore for InMemoryStore {
    async fn insert(&self, mut reading: Reading) -> Result<String, ApiError> {
        self.check()?;
        let oid = ObjectId::new();
        reading.id = Some(oid);
        self.readings.lock().unwrap().push(reading);
        Ok(oid.to_hex())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Reading>, ApiError> {
        self.check()?;
        Ok(self.sorted_desc().into_iter().take(limit as usize).collect())
    }

    async fn latest(&self) -> Result<Option<Reading>, ApiError> {
        self.check()?;
        Ok(self.sorted_desc().into_iter().next())
    }
}
