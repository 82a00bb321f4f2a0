use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::client::{ClientError, ClientRecord, ClientStore};

/// Stores the record set as a single JSON value under one Redis key.
pub struct RedisClientStore {
  redis: ConnectionManager,
  key: String,
}

impl RedisClientStore {
  pub fn new(redis: ConnectionManager, key: impl Into<String>) -> Self {
    Self {
      redis,
      key: key.into(),
    }
  }
}

#[async_trait]
impl ClientStore for RedisClientStore {
  async fn load_all(&self) -> Result<Vec<ClientRecord>, ClientError> {
    let mut conn = self.redis.clone();
    let value: Option<String> = conn
      .get(&self.key)
      .await
      .map_err(|e| ClientError::Storage(format!("Redis GET {} failed: {}", self.key, e)))?;

    match value {
      Some(json) if !json.trim().is_empty() => Ok(serde_json::from_str(&json)?),
      _ => Ok(Vec::new()),
    }
  }

  async fn save_all(&self, records: &[ClientRecord]) -> Result<(), ClientError> {
    let json = serde_json::to_string(records)?;
    let mut conn = self.redis.clone();
    conn
      .set::<_, _, ()>(&self.key, json)
      .await
      .map_err(|e| ClientError::Storage(format!("Redis SET {} failed: {}", self.key, e)))?;

    tracing::debug!(count = records.len(), key = %self.key, "Client records saved to Redis");
    Ok(())
  }
}
