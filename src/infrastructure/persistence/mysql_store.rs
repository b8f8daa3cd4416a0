use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use crate::domain::entities::reading::Reading;
use crate::domain::ports::store::{ReadingStore, StoreError};

/// MySQL-backed reading store.
///
/// Opens a fresh connection per insert and closes it afterwards; no pool.
/// The `readings` table is assumed to exist; there is no migration logic.
/// The row timestamp comes from the database server (`NOW()`), not from
/// this process.
pub struct MySqlStore {
    options: MySqlConnectOptions,
}

impl MySqlStore {
    #[must_use]
    pub fn new(host: &str, database: &str, user: &str, password: &str) -> Self {
        let options = MySqlConnectOptions::new()
            .host(host)
            .database(database)
            .username(user)
            .password(password);
        Self { options }
    }
}

#[async_trait]
impl ReadingStore for MySqlStore {
    async fn insert(&self, reading: &Reading) -> Result<(), StoreError> {
        let mut conn: MySqlConnection = self
            .options
            .connect()
            .await
            .map_err(|e| StoreError::ConnectFailed(e.to_string()))?;

        sqlx::query("INSERT INTO readings (temperature, humidity, timestamp) VALUES (?, ?, NOW())")
            .bind(reading.temperature)
            .bind(reading.humidity)
            .execute(&mut conn)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        // Close politely; a failure here is not worth failing the cycle for.
        if let Err(e) = conn.close().await {
            tracing::debug!("Error closing database connection: {e}");
        }
        Ok(())
    }
}
