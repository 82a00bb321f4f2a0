pub mod calculate_totals;
pub mod cancel_voucher;
pub mod emit_invoice;
pub mod get_voucher;
pub mod issue_note;

pub use calculate_totals::{
  CalculateTotalsCommand, CalculateTotalsResponse, CalculateTotalsUseCase, VatBreakdownDto,
};
pub use cancel_voucher::{
  CancelVoucherCommand, CancelVoucherResponse, CancelVoucherUseCase, ListSalesPointsResponse,
  ListSalesPointsUseCase,
};
pub use emit_invoice::{EmitInvoiceCommand, EmitInvoiceResponse, EmitInvoiceUseCase, VoucherDto};
pub use get_voucher::{GetVoucherCommand, GetVoucherResponse, GetVoucherUseCase};
pub use issue_note::{IssueNoteCommand, IssueNoteResponse, IssueNoteUseCase, NoteKind};

#[cfg(test)]
pub(crate) mod tests {
  use async_trait::async_trait;
  use chrono::NaiveDate;
  use rust_decimal_macros::dec;

  use crate::domain::invoice::{
    ConceptKind, EmissionRequest, EmittedVoucher, GatewayResponse, InvoiceClient, InvoiceError,
    InvoiceGateway, InvoiceLineItem, UnitOfMeasure, VatRateCode, VoucherKind,
  };
  use crate::domain::tax_id::{DocumentKind, PersonKind, TaxRegime};

  /// Accepts everything and knows a single voucher, `f3a9c2`.
  #[derive(Default)]
  pub struct StubGateway;

  fn voucher(voucher_kind: VoucherKind, sales_point: u32) -> EmittedVoucher {
    EmittedVoucher {
      hash: "f3a9c2".to_string(),
      authorization_code: "74123456789012".to_string(),
      authorization_expiry: "2024-05-10".to_string(),
      number: "00000042".to_string(),
      sales_point,
      voucher_kind,
      pdf_base64: Some("JVBERg==".to_string()),
    }
  }

  #[async_trait]
  impl InvoiceGateway for StubGateway {
    async fn emit(
      &self,
      request: &EmissionRequest,
    ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError> {
      Ok(GatewayResponse {
        success: true,
        message: None,
        data: Some(voucher(request.voucher_kind, request.sales_point)),
      })
    }

    async fn fetch_voucher(
      &self,
      hash: &str,
    ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError> {
      if hash != "f3a9c2" {
        return Ok(GatewayResponse {
          success: false,
          message: Some("Comprobante inexistente".to_string()),
          data: None,
        });
      }
      Ok(GatewayResponse {
        success: true,
        message: None,
        data: Some(voucher(VoucherKind::InvoiceB, 1)),
      })
    }

    async fn cancel_voucher(
      &self,
      _hash: &str,
      _reason: &str,
    ) -> Result<GatewayResponse<serde_json::Value>, InvoiceError> {
      Ok(GatewayResponse {
        success: true,
        message: None,
        data: None,
      })
    }

    async fn sales_points(&self) -> Result<GatewayResponse<serde_json::Value>, InvoiceError> {
      Ok(GatewayResponse {
        success: true,
        message: None,
        data: Some(serde_json::json!([{ "Numero": 1, "Descripcion": "Casa central" }])),
      })
    }
  }

  pub fn emission_request() -> EmissionRequest {
    EmissionRequest {
      voucher_kind: VoucherKind::InvoiceB,
      sales_point: 1,
      issue_date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
      service_from: None,
      service_to: None,
      payment_due: None,
      client: InvoiceClient {
        document: "20123456786".to_string(),
        document_kind: DocumentKind::Cuit,
        given_name: "Juan".to_string(),
        family_name: Some("Pérez".to_string()),
        legal_name: None,
        person_kind: PersonKind::Individual,
        tax_regime: Some(TaxRegime::FinalConsumer),
        email: None,
        phone: None,
        address: None,
        locality: None,
        province: None,
        postal_code: None,
        country: None,
        notes: None,
      },
      items: vec![InvoiceLineItem {
        description: "Mantenimiento".to_string(),
        quantity: dec!(1),
        unit_price: dec!(500),
        concept: Some(ConceptKind::Services),
        unit_of_measure: Some(UnitOfMeasure::Units),
        discount_percent: None,
        vat_rate: Some(VatRateCode::TwentyOne),
        notes: None,
      }],
      legend: None,
      payment_order: None,
      initial_message: None,
      delivery_note: None,
      auto_email: None,
      related_voucher: None,
    }
  }
}
