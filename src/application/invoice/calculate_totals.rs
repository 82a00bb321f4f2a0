use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::invoice::{
  InvoiceError, InvoiceLineItem, VatRateCode, compute_totals, validate_line_items, vat_percentage,
};

#[derive(Debug, Deserialize)]
pub struct CalculateTotalsCommand {
  pub items: Vec<InvoiceLineItem>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VatBreakdownDto {
  pub code: VatRateCode,
  #[serde(with = "rust_decimal::serde::float")]
  pub percentage: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CalculateTotalsResponse {
  #[serde(with = "rust_decimal::serde::float")]
  pub subtotal: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub vat_total: Decimal,
  #[serde(with = "rust_decimal::serde::float")]
  pub grand_total: Decimal,
  pub vat_breakdown: Vec<VatBreakdownDto>,
  /// Line item problems. Totals are computed regardless, unless an amount
  /// does not fit in a `Decimal`.
  pub errors: Vec<String>,
}

/// Live totals for an invoice form.
#[derive(Debug, Default)]
pub struct CalculateTotalsUseCase;

impl CalculateTotalsUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    command: CalculateTotalsCommand,
  ) -> Result<CalculateTotalsResponse, InvoiceError> {
    let totals = compute_totals(&command.items)?;
    let report = validate_line_items(&command.items);

    let vat_breakdown = totals
      .rounded_breakdown()
      .into_iter()
      .map(|(code, amount)| VatBreakdownDto {
        code,
        percentage: vat_percentage(code),
        amount,
      })
      .collect();

    Ok(CalculateTotalsResponse {
      subtotal: totals.subtotal,
      vat_total: totals.vat_total,
      grand_total: totals.grand_total,
      vat_breakdown,
      errors: report.errors,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ConceptKind, UnitOfMeasure};
  use rust_decimal_macros::dec;

  fn item(quantity: Decimal, price: Decimal, vat_rate: Option<VatRateCode>) -> InvoiceLineItem {
    InvoiceLineItem {
      description: "Horas de desarrollo".to_string(),
      quantity,
      unit_price: price,
      concept: Some(ConceptKind::Services),
      unit_of_measure: Some(UnitOfMeasure::Units),
      discount_percent: None,
      vat_rate,
      notes: None,
    }
  }

  #[test]
  fn test_breakdown_sorted_by_code() {
    let response = CalculateTotalsUseCase::new().execute(CalculateTotalsCommand {
      items: vec![
        item(dec!(1), dec!(100), Some(VatRateCode::TwentyOne)),
        item(dec!(1), dec!(99.99), Some(VatRateCode::TenPointFive)),
      ],
    })
    .unwrap();

    assert_eq!(response.subtotal, dec!(199.99));
    assert_eq!(response.vat_total, dec!(31.50));
    assert_eq!(response.grand_total, dec!(231.49));
    assert_eq!(response.vat_breakdown.len(), 2);
    assert_eq!(response.vat_breakdown[0].code, VatRateCode::TenPointFive);
    assert_eq!(response.vat_breakdown[0].amount, dec!(10.50));
    assert_eq!(response.vat_breakdown[1].percentage, dec!(21));
    assert!(response.errors.is_empty());
  }

  #[test]
  fn test_reports_item_errors_alongside_totals() {
    let response = CalculateTotalsUseCase::new().execute(CalculateTotalsCommand {
      items: vec![item(dec!(0), dec!(100), None)],
    })
    .unwrap();
    assert_eq!(response.grand_total, dec!(0));
    assert_eq!(
      response.errors,
      vec!["Item 1: La cantidad debe ser mayor a 0".to_string()]
    );
  }

  #[test]
  fn test_out_of_range_amounts_are_rejected() {
    let huge = dec!(100000000000000000000);
    let result = CalculateTotalsUseCase::new().execute(CalculateTotalsCommand {
      items: vec![item(huge, huge, Some(VatRateCode::TwentyOne))],
    });
    match result {
      Err(InvoiceError::Validation(errors)) => {
        assert_eq!(errors, vec!["Item 1: El importe está fuera de rango".to_string()])
      }
      other => panic!("unexpected result: {:?}", other),
    }
  }
}
