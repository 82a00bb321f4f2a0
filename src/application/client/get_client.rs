use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::client::{ClientDirectory, ClientError, ClientRecord};
use crate::domain::tax_id;

#[derive(Debug, Deserialize)]
pub struct GetClientCommand {
  pub client_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct FindClientByTaxIdCommand {
  pub tax_id: String,
}

#[derive(Debug, Serialize)]
pub struct GetClientResponse {
  pub client: ClientRecord,
  pub tax_id_formatted: String,
  pub display_name: String,
}

impl From<ClientRecord> for GetClientResponse {
  fn from(client: ClientRecord) -> Self {
    Self {
      tax_id_formatted: tax_id::format(&client.tax_id),
      display_name: client.display_name(),
      client,
    }
  }
}

pub struct GetClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl GetClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(&self, command: GetClientCommand) -> Result<GetClientResponse, ClientError> {
    self
      .directory
      .get_by_id(command.client_id)
      .await?
      .map(GetClientResponse::from)
      .ok_or(ClientError::NotFound(command.client_id))
  }
}

/// Tax ID lookups also match inactive records; a miss is `Ok(None)`.
pub struct FindClientByTaxIdUseCase {
  directory: Arc<ClientDirectory>,
}

impl FindClientByTaxIdUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(
    &self,
    command: FindClientByTaxIdCommand,
  ) -> Result<Option<GetClientResponse>, ClientError> {
    let found = self.directory.get_by_tax_id(&command.tax_id).await?;
    Ok(found.map(GetClientResponse::from))
  }
}
