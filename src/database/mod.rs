//! MongoDB gateway.
//!
//! The process owns exactly one pooled client, created lazily on first
//! acquisition. Concurrent first calls race on a `OnceCell`, so at most one
//! pool is ever constructed; a failed initialization leaves the cell empty
//! and a later request retries. There is no teardown: the handle lives for
//! the lifetime of the process.

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::error::ApiError;

static CLIENT: OnceCell<Client> = OnceCell::const_new();

async fn connect(config: &DatabaseConfig) -> Result<Client, ApiError> {
    let mut options = ClientOptions::parse(&config.uri).await.map_err(|err| {
        ApiError::Configuration(format!("invalid connection string: {}", err))
    })?;

    options.max_pool_size = Some(config.pool_size);
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.max_idle_time = Some(Duration::from_secs(config.idle_timeout_secs));

    Ok(Client::with_options(options)?)
}

/// Acquire the process-wide database handle, creating the pooled client on
/// first use. Repeated calls return the same underlying pool.
///
/// An unreachable server does not fail here: the driver connects lazily, so
/// `ApiError::Connection` surfaces at operation time and is mapped to a 500
/// by the routes.
pub async fn acquire(config: &DatabaseConfig) -> Result<Database, ApiError> {
    let client = CLIENT.get_or_try_init(|| connect(config)).await?;
    Ok(client.database(&config.name))
}
