use std::sync::Arc;

use super::calculator::{self, ValidationReport};
use super::entities::{EmissionRequest, EmittedVoucher, GatewayResponse};
use super::errors::InvoiceError;
use super::ports::InvoiceGateway;
use super::value_objects::VoucherKind;

impl EmissionRequest {
  /// Client, items, sales point and related voucher checks, all collected.
  pub fn validate(&self) -> ValidationReport {
    let mut report = calculator::validate_client(&self.client);
    report.merge(calculator::validate_line_items(&self.items));

    if self.sales_point == 0 {
      report.push("El punto de venta es obligatorio");
    }
    if self.voucher_kind.is_note()
      && self
        .related_voucher
        .as_deref()
        .is_none_or(|hash| hash.trim().is_empty())
    {
      report.push("Las notas de crédito y débito requieren el comprobante relacionado");
    }
    if let (Some(from), Some(to)) = (self.service_from, self.service_to) {
      if from > to {
        report.push("La fecha de inicio del servicio no puede ser posterior a la de fin");
      }
    }

    report
  }
}

pub struct InvoiceService {
  gateway: Arc<dyn InvoiceGateway>,
}

impl InvoiceService {
  pub fn new(gateway: Arc<dyn InvoiceGateway>) -> Self {
    Self { gateway }
  }

  /// Validates and forwards an emission request. Invalid requests never
  /// reach the gateway.
  pub async fn emit(&self, request: EmissionRequest) -> Result<EmittedVoucher, InvoiceError> {
    let report = request.validate();
    if !report.is_valid() {
      return Err(InvoiceError::Validation(report.errors));
    }

    let response = self.gateway.emit(&request).await?;
    let voucher = Self::accepted(response, "Error al emitir la factura")?;

    tracing::info!(
      hash = %voucher.hash,
      number = %voucher.number,
      voucher_kind = voucher.voucher_kind.code(),
      "Voucher emitted"
    );
    Ok(voucher)
  }

  pub async fn emit_credit_note(
    &self,
    related_hash: String,
    mut request: EmissionRequest,
  ) -> Result<EmittedVoucher, InvoiceError> {
    request.voucher_kind = VoucherKind::credit_note_for(request.client.tax_regime);
    request.related_voucher = Some(related_hash);
    self.emit(request).await
  }

  pub async fn emit_debit_note(
    &self,
    related_hash: String,
    mut request: EmissionRequest,
  ) -> Result<EmittedVoucher, InvoiceError> {
    request.voucher_kind = VoucherKind::debit_note_for(request.client.tax_regime);
    request.related_voucher = Some(related_hash);
    self.emit(request).await
  }

  pub async fn fetch_voucher(&self, hash: &str) -> Result<EmittedVoucher, InvoiceError> {
    let response = self.gateway.fetch_voucher(hash).await?;
    Self::accepted(response, "Error al obtener el comprobante")
  }

  pub async fn cancel_voucher(&self, hash: &str, reason: &str) -> Result<(), InvoiceError> {
    if reason.trim().is_empty() {
      return Err(InvoiceError::Validation(vec![
        "El motivo de anulación es obligatorio".to_string(),
      ]));
    }

    let response = self.gateway.cancel_voucher(hash, reason).await?;
    if !response.success {
      return Err(InvoiceError::Rejected(
        response
          .message
          .unwrap_or_else(|| "Error al anular el comprobante".to_string()),
      ));
    }

    tracing::info!(hash, "Voucher cancelled");
    Ok(())
  }

  pub async fn sales_points(&self) -> Result<serde_json::Value, InvoiceError> {
    let response = self.gateway.sales_points().await?;
    if !response.success {
      return Err(InvoiceError::Rejected(
        response
          .message
          .unwrap_or_else(|| "Error al obtener puntos de venta".to_string()),
      ));
    }
    Ok(response.data.unwrap_or(serde_json::Value::Null))
  }

  fn accepted(
    response: GatewayResponse<EmittedVoucher>,
    fallback: &str,
  ) -> Result<EmittedVoucher, InvoiceError> {
    if !response.success {
      let message = response.message.unwrap_or_else(|| fallback.to_string());
      tracing::warn!(message = %message, "Invoice gateway rejected the request");
      return Err(InvoiceError::Rejected(message));
    }
    response
      .data
      .ok_or_else(|| InvoiceError::Gateway("Successful response without voucher data".to_string()))
  }
}
