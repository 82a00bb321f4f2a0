use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::client::{
  ClientDirectory, ClientError, ClientFilters, ClientRecord, DEFAULT_PAGE_SIZE,
};
use crate::domain::tax_id::{self, PersonKind, TaxRegime};

#[derive(Debug, Default, Deserialize)]
pub struct ListClientsCommand {
  pub filters: ClientFilters,
  pub page: Option<usize>,
  pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ClientSummaryDto {
  pub id: Uuid,
  pub tax_id: String,
  pub tax_id_formatted: String,
  pub display_name: String,
  pub person_kind: PersonKind,
  pub tax_regime: TaxRegime,
  pub tax_regime_label: &'static str,
  pub email: Option<String>,
  pub active: bool,
  pub created_at: DateTime<Utc>,
}

impl From<&ClientRecord> for ClientSummaryDto {
  fn from(record: &ClientRecord) -> Self {
    Self {
      id: record.id,
      tax_id: record.tax_id.clone(),
      tax_id_formatted: tax_id::format(&record.tax_id),
      display_name: record.display_name(),
      person_kind: record.person_kind,
      tax_regime: record.tax_regime,
      tax_regime_label: record.tax_regime.label(),
      email: record.email.clone(),
      active: record.active,
      created_at: record.created_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListClientsResponse {
  pub clients: Vec<ClientSummaryDto>,
  pub total: usize,
  pub page: usize,
  pub page_size: usize,
  pub total_pages: usize,
}

pub struct ListClientsUseCase {
  directory: Arc<ClientDirectory>,
}

impl ListClientsUseCase {
  pub fn new(directory: Arc<ClientDirectory>) -> Self {
    Self { directory }
  }

  pub async fn execute(
    &self,
    command: ListClientsCommand,
  ) -> Result<ListClientsResponse, ClientError> {
    let page = self
      .directory
      .list(
        &command.filters,
        command.page.unwrap_or(1),
        command.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
      )
      .await?;

    Ok(ListClientsResponse {
      clients: page.records.iter().map(ClientSummaryDto::from).collect(),
      total: page.total,
      page: page.page,
      page_size: page.page_size,
      total_pages: page.total_pages,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::client::tests::{directory, individual};

  #[tokio::test]
  async fn test_defaults_to_first_page() {
    let directory = directory();
    for n in 0..12 {
      directory
        .create(individual(&format!("2012345{:04}", n)))
        .await
        .unwrap();
    }

    let use_case = ListClientsUseCase::new(directory);
    let response = use_case.execute(ListClientsCommand::default()).await.unwrap();

    assert_eq!(response.total, 12);
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(response.total_pages, 2);
    assert_eq!(response.clients.len(), 10);
  }

  #[tokio::test]
  async fn test_summary_fields() {
    let directory = directory();
    directory.create(individual("20123456786")).await.unwrap();

    let response = ListClientsUseCase::new(directory)
      .execute(ListClientsCommand::default())
      .await
      .unwrap();
    let summary = &response.clients[0];

    assert_eq!(summary.tax_id_formatted, "20-12345678-6");
    assert_eq!(summary.display_name, "Juan Pérez");
    assert_eq!(summary.tax_regime_label, "Monotributo");
  }
}
