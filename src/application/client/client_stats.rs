use std::sync::Arc;

use crate::domain::client::{ClientDirectory, ClientError, ClientStats};

pub struct ClientStatsUseCase {
  directory: Arc<ClientDirectory>,
}

impl ClientStatsUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(&self) -> Result<ClientStats, ClientError> {
    self.directory.stats().await
  }
}
