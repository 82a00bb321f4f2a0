use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::ensure_invoiceable;
use crate::domain::client::{ClientDirectory, ClientError, ClientPatch, ClientRecord};

#[derive(Debug, Deserialize)]
pub struct UpdateClientCommand {
  pub client_id: Uuid,
  pub patch: ClientPatch,
}

#[derive(Debug, Serialize)]
pub struct UpdateClientResponse {
  pub client: ClientRecord,
}

pub struct UpdateClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl UpdateClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  /// Rejects patches that would leave the record unusable on an invoice.
  pub async fn execute(
    &self,
    command: UpdateClientCommand,
  ) -> Result<UpdateClientResponse, ClientError> {
    let mut candidate = self
      .directory
      .get_by_id(command.client_id)
      .await?
      .ok_or(ClientError::NotFound(command.client_id))?;
    candidate.apply(command.patch.clone());
    ensure_invoiceable(&candidate)?;

    let client = self
      .directory
      .update(command.client_id, command.patch)
      .await?;
    Ok(UpdateClientResponse { client })
  }
}
