pub mod archive_client;
pub mod client_stats;
pub mod create_client;
pub mod get_client;
pub mod import_client;
pub mod list_clients;
pub mod update_client;

pub use archive_client::{
  ArchiveClientCommand, ArchiveClientUseCase, ReactivateClientCommand, ReactivateClientResponse,
  ReactivateClientUseCase,
};
pub use client_stats::ClientStatsUseCase;
pub use create_client::{CreateClientCommand, CreateClientResponse, CreateClientUseCase};
pub use get_client::{
  FindClientByTaxIdCommand, FindClientByTaxIdUseCase, GetClientCommand, GetClientResponse,
  GetClientUseCase,
};
pub use import_client::{ImportClientCommand, ImportClientResponse, ImportClientUseCase};
pub use list_clients::{
  ClientSummaryDto, ListClientsCommand, ListClientsResponse, ListClientsUseCase,
};
pub use update_client::{UpdateClientCommand, UpdateClientResponse, UpdateClientUseCase};

use crate::domain::client::{ClientError, ClientRecord};
use crate::domain::invoice::{InvoiceClient, validate_client};

/// A stored client must carry everything an invoice needs.
fn ensure_invoiceable(record: &ClientRecord) -> Result<(), ClientError> {
  let report = validate_client(&InvoiceClient::from(record));
  if report.is_valid() {
    Ok(())
  } else {
    Err(ClientError::Validation(report.errors))
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;

  use crate::domain::client::{
    ClientData, ClientDirectory, ClientError, TaxAuthorityLookup, TaxAuthorityRecord,
  };
  use crate::domain::tax_id::{DocumentKind, PersonKind, TaxRegime};
  use crate::infrastructure::persistence::InMemoryClientStore;

  struct NoLookup;

  #[async_trait]
  impl TaxAuthorityLookup for NoLookup {
    async fn lookup(&self, _tax_id: &str) -> Result<Option<TaxAuthorityRecord>, ClientError> {
      Ok(None)
    }
  }

  pub fn directory() -> Arc<ClientDirectory> {
    Arc::new(ClientDirectory::new(
      Arc::new(InMemoryClientStore::new()),
      Arc::new(NoLookup),
    ))
  }

  pub fn individual(tax_id: &str) -> ClientData {
    ClientData {
      tax_id: tax_id.to_string(),
      tax_id_kind: DocumentKind::Cuit,
      person_kind: PersonKind::Individual,
      given_name: "Juan".to_string(),
      family_name: Some("Pérez".to_string()),
      legal_name: None,
      tax_regime: TaxRegime::SimplifiedRegime,
      email: Some("juan@example.com".to_string()),
      phone: None,
      address: None,
      locality: None,
      province: None,
      postal_code: None,
      country: None,
      notes: None,
    }
  }
}
