use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ensure_invoiceable;
use crate::domain::client::{ClientData, ClientDirectory, ClientError, ClientRecord};
use crate::domain::tax_id;

#[derive(Debug, Deserialize)]
pub struct CreateClientCommand {
  pub client: ClientData,
}

#[derive(Debug, Serialize)]
pub struct CreateClientResponse {
  pub client: ClientRecord,
}

pub struct CreateClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl CreateClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(
    &self,
    command: CreateClientCommand,
  ) -> Result<CreateClientResponse, ClientError> {
    ensure_invoiceable(&ClientRecord::new(command.client.clone()))?;

    if let Err(err) = tax_id::validate(&command.client.tax_id) {
      tracing::warn!(tax_id = %command.client.tax_id, error = %err, "Creating client with unverified tax ID");
    }

    let client = self.directory.create(command.client).await?;
    Ok(CreateClientResponse { client })
  }
}
