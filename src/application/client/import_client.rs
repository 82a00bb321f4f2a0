use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::client::{ClientDirectory, ClientError, ClientRecord};

#[derive(Debug, Deserialize)]
pub struct ImportClientCommand {
  pub tax_id: String,
}

#[derive(Debug, Serialize)]
pub struct ImportClientResponse {
  pub client: ClientRecord,
  /// False when the tax ID was already in the directory.
  pub created: bool,
}

pub struct ImportClientUseCase {
  directory: Arc<ClientDirectory>,
}

impl ImportClientUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  /// `Ok(None)` when the tax authority does not know the number.
  pub async fn execute(
    &self,
    command: ImportClientCommand,
  ) -> Result<Option<ImportClientResponse>, ClientError> {
    let known = self.directory.get_by_tax_id(&command.tax_id).await?;

    let imported = self.directory.import_from_lookup(&command.tax_id).await?;
    Ok(imported.map(|client| ImportClientResponse {
      created: known.is_none_or(|existing| existing.id != client.id),
      client,
    }))
  }
}
