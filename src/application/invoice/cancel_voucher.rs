use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct CancelVoucherCommand {
  pub hash: String,
  pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct CancelVoucherResponse {
  pub hash: String,
  pub cancelled: bool,
}

pub struct CancelVoucherUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CancelVoucherUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: CancelVoucherCommand,
  ) -> Result<CancelVoucherResponse, InvoiceError> {
    self
      .invoice_service
      .cancel_voucher(&command.hash, &command.reason)
      .await?;

    Ok(CancelVoucherResponse {
      hash: command.hash,
      cancelled: true,
    })
  }
}

#[derive(Debug, Serialize)]
pub struct ListSalesPointsResponse {
  pub sales_points: serde_json::Value,
}

/// Sales points come back in the gateway's own shape.
pub struct ListSalesPointsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListSalesPointsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self) -> Result<ListSalesPointsResponse, InvoiceError> {
    let sales_points = self.invoice_service.sales_points().await?;
    Ok(ListSalesPointsResponse { sales_points })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::tests::StubGateway;

  fn service() -> Arc<InvoiceService> {
    Arc::new(InvoiceService::new(Arc::new(StubGateway::default())))
  }

  #[tokio::test]
  async fn test_cancel_requires_reason() {
    let use_case = CancelVoucherUseCase::new(service());
    let result = use_case
      .execute(CancelVoucherCommand {
        hash: "f3a9c2".to_string(),
        reason: String::new(),
      })
      .await;
    assert!(matches!(result, Err(InvoiceError::Validation(_))));

    let response = use_case
      .execute(CancelVoucherCommand {
        hash: "f3a9c2".to_string(),
        reason: "Importe incorrecto".to_string(),
      })
      .await
      .unwrap();
    assert!(response.cancelled);
  }

  #[tokio::test]
  async fn test_lists_sales_points() {
    let response = ListSalesPointsUseCase::new(service()).execute().await.unwrap();
    assert_eq!(response.sales_points[0]["Numero"], 1);
  }
}
