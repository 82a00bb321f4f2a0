use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::client::{ClientDirectory, ClientError, ClientRecord};

#[derive(Debug, Deserialize)]
pub struct ArchiveClientCommand {
  pub client_id: Uuid,
}

pub struct ArchiveClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl ArchiveClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(&self, command: ArchiveClientCommand) -> Result<(), ClientError> {
    self.directory.soft_delete(command.client_id).await
  }
}

#[derive(Debug, Deserialize)]
pub struct ReactivateClientCommand {
  pub client_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ReactivateClientResponse {
  pub client: ClientRecord,
}

pub struct ReactivateClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl ReactivateClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(
    &self,
    command: ReactivateClientCommand,
  ) -> Result<ReactivateClientResponse, ClientError> {
    let client = self.directory.reactivate(command.client_id).await?;
    Ok(ReactivateClientResponse { client })
  }
}
