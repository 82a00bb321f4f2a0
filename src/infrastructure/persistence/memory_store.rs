use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::client::{ClientError, ClientRecord, ClientStore};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryClientStore {
  records: RwLock<Vec<ClientRecord>>,
}

impl InMemoryClientStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
  async fn load_all(&self) -> Result<Vec<ClientRecord>, ClientError> {
    Ok(self.records.read().await.clone())
  }

  async fn save_all(&self, records: &[ClientRecord]) -> Result<(), ClientError> {
    *self.records.write().await = records.to_vec();
    Ok(())
  }
}
