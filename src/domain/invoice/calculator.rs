//! Pure invoice checks and arithmetic.
//!
//! Validation never stops at the first problem: every violated rule adds
//! one message so the whole form can be fixed in a single pass.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use super::entities::{InvoiceClient, InvoiceLineItem, InvoiceTotals, round_currency};
use super::errors::InvoiceError;
use super::value_objects::VatRateCode;
use crate::domain::tax_id::PersonKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
  pub errors: Vec<String>,
}

impl ValidationReport {
  pub fn is_valid(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn push(&mut self, message: impl Into<String>) {
    self.errors.push(message.into());
  }

  pub fn merge(&mut self, other: ValidationReport) {
    self.errors.extend(other.errors);
  }
}

fn is_blank(value: Option<&str>) -> bool {
  value.is_none_or(|v| v.trim().is_empty())
}

pub fn validate_client(client: &InvoiceClient) -> ValidationReport {
  let mut report = ValidationReport::default();

  if is_blank(Some(&client.document)) {
    report.push("El documento es obligatorio");
  }
  if is_blank(Some(&client.given_name)) {
    report.push("El nombre es obligatorio");
  }
  match client.person_kind {
    PersonKind::Individual if is_blank(client.family_name.as_deref()) => {
      report.push("El apellido es obligatorio para personas físicas");
    }
    PersonKind::Organization if is_blank(client.legal_name.as_deref()) => {
      report.push("La razón social es obligatoria para personas jurídicas");
    }
    _ => {}
  }
  if client.tax_regime.is_none_or(|regime| regime.is_missing()) {
    report.push("La condición impositiva es obligatoria");
  }

  report
}

pub fn validate_line_items(items: &[InvoiceLineItem]) -> ValidationReport {
  let mut report = ValidationReport::default();

  if items.is_empty() {
    report.push("Debe incluir al menos un item");
    return report;
  }

  for (index, item) in items.iter().enumerate() {
    let n = index + 1;
    if is_blank(Some(&item.description)) {
      report.push(format!("Item {}: La descripción es obligatoria", n));
    }
    if item.quantity <= Decimal::ZERO {
      report.push(format!("Item {}: La cantidad debe ser mayor a 0", n));
    }
    if item.unit_price <= Decimal::ZERO {
      report.push(format!("Item {}: El precio unitario debe ser mayor a 0", n));
    }
    if item.concept.is_none() {
      report.push(format!("Item {}: El concepto es obligatorio", n));
    }
    if item.unit_of_measure.is_none() {
      report.push(format!("Item {}: La unidad de medida es obligatoria", n));
    }
    let discount = item.discount();
    if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
      report.push(format!(
        "Item {}: La bonificación debe estar entre 0 y 100",
        n
      ));
    }
    if item.quantity > Decimal::ZERO
      && item.unit_price > Decimal::ZERO
      && item.net_amount().is_none()
    {
      report.push(out_of_range(n));
    }
  }

  report
}

fn out_of_range(n: usize) -> String {
  format!("Item {}: El importe está fuera de rango", n)
}

/// Percentage for a rate code. Codes outside the fixed table are taxed at
/// 21%.
pub fn vat_percentage(code: VatRateCode) -> Decimal {
  code.percentage().unwrap_or_else(|| {
    tracing::warn!(code = code.code(), "Unknown VAT rate code, applying 21%");
    VatRateCode::DEFAULT_PERCENTAGE
  })
}

/// Fails with a validation error when a line or a running total does not fit
/// in a `Decimal`.
pub fn compute_totals(items: &[InvoiceLineItem]) -> Result<InvoiceTotals, InvoiceError> {
  let total_out_of_range =
    || InvoiceError::Validation(vec!["El total de la factura está fuera de rango".to_string()]);

  let mut subtotal = Decimal::ZERO;
  let mut vat_total = Decimal::ZERO;
  let mut vat_breakdown: BTreeMap<VatRateCode, Decimal> = BTreeMap::new();

  for (index, item) in items.iter().enumerate() {
    let item_out_of_range = || InvoiceError::Validation(vec![out_of_range(index + 1)]);

    let net = item.net_amount().ok_or_else(item_out_of_range)?;
    subtotal = subtotal.checked_add(net).ok_or_else(total_out_of_range)?;

    if let Some(code) = item.vat_rate {
      let vat = net
        .checked_mul(vat_percentage(code))
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(item_out_of_range)?;
      vat_total = vat_total.checked_add(vat).ok_or_else(total_out_of_range)?;
      let entry = vat_breakdown.entry(code).or_insert(Decimal::ZERO);
      *entry = entry.checked_add(vat).ok_or_else(total_out_of_range)?;
    }
  }

  let grand_total = subtotal.checked_add(vat_total).ok_or_else(total_out_of_range)?;

  Ok(InvoiceTotals {
    subtotal: round_currency(subtotal),
    vat_total: round_currency(vat_total),
    grand_total: round_currency(grand_total),
    vat_breakdown,
  })
}
