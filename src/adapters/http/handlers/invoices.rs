use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CalculateTotalsRequest, CancelVoucherRequest, IssueNoteRequest},
  errors::ApiError,
};
use crate::application::invoice::*;
use crate::domain::invoice::EmissionRequest;

/// Totals preview
/// POST /api/v1/invoices/totals
pub async fn calculate_totals_handler(
  request: web::Json<CalculateTotalsRequest>,
  use_case: web::Data<Arc<CalculateTotalsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute(CalculateTotalsCommand {
    items: request.into_inner().items,
  })?;
  Ok(HttpResponse::Ok().json(response))
}

/// Emit invoice
/// POST /api/v1/invoices/emit
pub async fn emit_invoice_handler(
  request: web::Json<EmissionRequest>,
  use_case: web::Data<Arc<EmitInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case
    .execute(EmitInvoiceCommand {
      request: request.into_inner(),
    })
    .await?;
  Ok(HttpResponse::Created().json(response))
}

async fn issue_note(
  kind: NoteKind,
  request: IssueNoteRequest,
  use_case: &IssueNoteUseCase,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = IssueNoteCommand {
    kind,
    related_voucher: request.related_voucher,
    request: request.request,
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Created().json(response))
}

/// Emit credit note
/// POST /api/v1/invoices/credit-notes
pub async fn emit_credit_note_handler(
  request: web::Json<IssueNoteRequest>,
  use_case: web::Data<Arc<IssueNoteUseCase>>,
) -> Result<HttpResponse, ApiError> {
  issue_note(NoteKind::Credit, request.into_inner(), &use_case).await
}

/// Emit debit note
/// POST /api/v1/invoices/debit-notes
pub async fn emit_debit_note_handler(
  request: web::Json<IssueNoteRequest>,
  use_case: web::Data<Arc<IssueNoteUseCase>>,
) -> Result<HttpResponse, ApiError> {
  issue_note(NoteKind::Debit, request.into_inner(), &use_case).await
}

/// Fetch voucher by hash
/// GET /api/v1/invoices/vouchers/:hash
pub async fn get_voucher_handler(
  hash: web::Path<String>,
  use_case: web::Data<Arc<GetVoucherUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case
    .execute(GetVoucherCommand {
      hash: hash.into_inner(),
    })
    .await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Cancel voucher
/// POST /api/v1/invoices/vouchers/:hash/cancel
pub async fn cancel_voucher_handler(
  hash: web::Path<String>,
  request: web::Json<CancelVoucherRequest>,
  use_case: web::Data<Arc<CancelVoucherUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = CancelVoucherCommand {
    hash: hash.into_inner(),
    reason: request.into_inner().reason,
  };

  let response = use_case.execute(command).await?;
  Ok(HttpResponse::Ok().json(response))
}

/// Sales points enabled for the account
/// GET /api/v1/invoices/sales-points
pub async fn list_sales_points_handler(
  use_case: web::Data<Arc<ListSalesPointsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;
  Ok(HttpResponse::Ok().json(response))
}
