use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::invoice::{
  EmissionRequest, EmittedVoucher, InvoiceError, InvoiceService, VoucherKind,
};

#[derive(Debug, Deserialize)]
pub struct EmitInvoiceCommand {
  pub request: EmissionRequest,
}

/// Authorized voucher as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct VoucherDto {
  pub hash: String,
  pub authorization_code: String,
  pub authorization_expiry: String,
  pub number: String,
  pub sales_point: u32,
  pub voucher_kind: VoucherKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pdf_base64: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pdf_size: Option<usize>,
}

impl From<EmittedVoucher> for VoucherDto {
  fn from(voucher: EmittedVoucher) -> Self {
    let pdf_size = match voucher.pdf_bytes() {
      Ok(bytes) => bytes.map(|b| b.len()),
      Err(err) => {
        tracing::warn!(hash = %voucher.hash, error = %err, "Voucher PDF is not valid base64");
        None
      }
    };

    Self {
      hash: voucher.hash,
      authorization_code: voucher.authorization_code,
      authorization_expiry: voucher.authorization_expiry,
      number: voucher.number,
      sales_point: voucher.sales_point,
      voucher_kind: voucher.voucher_kind,
      pdf_base64: voucher.pdf_base64,
      pdf_size,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct EmitInvoiceResponse {
  pub voucher: VoucherDto,
}

pub struct EmitInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl EmitInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: EmitInvoiceCommand,
  ) -> Result<EmitInvoiceResponse, InvoiceError> {
    let voucher = self.invoice_service.emit(command.request).await?;
    Ok(EmitInvoiceResponse {
      voucher: voucher.into(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::tests::{StubGateway, emission_request};

  #[tokio::test]
  async fn test_emit_maps_voucher() {
    let service = Arc::new(InvoiceService::new(Arc::new(StubGateway::default())));
    let response = EmitInvoiceUseCase::new(service)
      .execute(EmitInvoiceCommand {
        request: emission_request(),
      })
      .await
      .unwrap();

    assert_eq!(response.voucher.hash, "f3a9c2");
    assert_eq!(response.voucher.voucher_kind, VoucherKind::InvoiceB);
    assert_eq!(response.voucher.pdf_size, Some(4));
  }

  #[test]
  fn test_bad_pdf_payload_is_dropped_from_size() {
    let dto = VoucherDto::from(EmittedVoucher {
      hash: "h".to_string(),
      authorization_code: "1".to_string(),
      authorization_expiry: "2024-05-10".to_string(),
      number: "00000001".to_string(),
      sales_point: 1,
      voucher_kind: VoucherKind::InvoiceC,
      pdf_base64: Some("not base64!".to_string()),
    });
    assert_eq!(dto.pdf_size, None);
  }
}
