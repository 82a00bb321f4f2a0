use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::emit_invoice::VoucherDto;
use crate::domain::invoice::{EmissionRequest, InvoiceError, InvoiceService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
  Credit,
  Debit,
}

/// The voucher kind in `request` is ignored; it is derived from the note
/// kind and the client's tax regime.
#[derive(Debug, Deserialize)]
pub struct IssueNoteCommand {
  pub kind: NoteKind,
  pub related_voucher: String,
  pub request: EmissionRequest,
}

#[derive(Debug, Serialize)]
pub struct IssueNoteResponse {
  pub kind: NoteKind,
  pub voucher: VoucherDto,
}

pub struct IssueNoteUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl IssueNoteUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: IssueNoteCommand) -> Result<IssueNoteResponse, InvoiceError> {
    let voucher = match command.kind {
      NoteKind::Credit => {
        self
          .invoice_service
          .emit_credit_note(command.related_voucher, command.request)
          .await?
      }
      NoteKind::Debit => {
        self
          .invoice_service
          .emit_debit_note(command.related_voucher, command.request)
          .await?
      }
    };

    Ok(IssueNoteResponse {
      kind: command.kind,
      voucher: voucher.into(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::tests::{StubGateway, emission_request};
  use crate::domain::invoice::VoucherKind;
  use crate::domain::tax_id::TaxRegime;

  fn use_case() -> IssueNoteUseCase {
    IssueNoteUseCase::new(Arc::new(InvoiceService::new(Arc::new(
      StubGateway::default(),
    ))))
  }

  #[tokio::test]
  async fn test_credit_note_for_registered_taxpayer_is_type_a() {
    let mut request = emission_request();
    request.client.tax_regime = Some(TaxRegime::RegisteredTaxpayer);

    let response = use_case()
      .execute(IssueNoteCommand {
        kind: NoteKind::Credit,
        related_voucher: "f3a9c2".to_string(),
        request,
      })
      .await
      .unwrap();
    assert_eq!(response.voucher.voucher_kind, VoucherKind::CreditNoteA);
  }

  #[tokio::test]
  async fn test_blank_related_voucher_is_invalid() {
    let result = use_case()
      .execute(IssueNoteCommand {
        kind: NoteKind::Debit,
        related_voucher: "  ".to_string(),
        request: emission_request(),
      })
      .await;
    assert!(matches!(result, Err(InvoiceError::Validation(_))));
  }
}
