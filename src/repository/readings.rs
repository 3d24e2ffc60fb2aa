use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneOptions, FindOptions};
use mongodb::Collection;

use crate::config::DatabaseConfig;
use crate::database;
use crate::error::ApiError;
use crate::models::reading::Reading;
use crate::repository::ReadingStore;

const COLLECTION: &str = "readings";

/// MongoDB-backed store.
///
/// Holds only the configuration; the pooled client itself lives in the
/// gateway and is shared process-wide, so cloning this around is cheap and
/// every operation reuses the same pool.
pub struct MongoReadingRepository {
    config: DatabaseConfig,
}

impl MongoReadingRepository {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    async fn collection(&self) -> Result<Collection<Reading>, ApiError> {
        let db = database::acquire(&self.config).await?;
        Ok(db.collection::<Reading>(COLLECTION))
    }
}

#[async_trait]
impl ReadingStore for MongoReadingRepository {
    async fn insert(&self, reading: Reading) -> Result<String, ApiError> {
        let result = self.collection().await?.insert_one(reading, None).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Reading>, ApiError> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .build();
        let cursor = self.collection().await?.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn latest(&self) -> Result<Option<Reading>, ApiError> {
        let options = FindOneOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        Ok(self.collection().await?.find_one(doc! {}, options).await?)
    }
}
