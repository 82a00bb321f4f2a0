use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::tax_id::{TaxRegime, UnknownCode};

// Voucher Kind - tipo de comprobante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VoucherKind {
  InvoiceA,
  DebitNoteA,
  CreditNoteA,
  InvoiceB,
  DebitNoteB,
  CreditNoteB,
  ReceiptA,
  ReceiptB,
  InvoiceC,
  DebitNoteC,
  CreditNoteC,
  ReceiptC,
}

impl VoucherKind {
  pub fn code(&self) -> u8 {
    match self {
      VoucherKind::InvoiceA => 1,
      VoucherKind::DebitNoteA => 2,
      VoucherKind::CreditNoteA => 3,
      VoucherKind::InvoiceB => 4,
      VoucherKind::DebitNoteB => 5,
      VoucherKind::CreditNoteB => 6,
      VoucherKind::ReceiptA => 7,
      VoucherKind::ReceiptB => 9,
      VoucherKind::InvoiceC => 19,
      VoucherKind::DebitNoteC => 20,
      VoucherKind::CreditNoteC => 21,
      VoucherKind::ReceiptC => 22,
    }
  }

  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(VoucherKind::InvoiceA),
      2 => Some(VoucherKind::DebitNoteA),
      3 => Some(VoucherKind::CreditNoteA),
      4 => Some(VoucherKind::InvoiceB),
      5 => Some(VoucherKind::DebitNoteB),
      6 => Some(VoucherKind::CreditNoteB),
      7 => Some(VoucherKind::ReceiptA),
      9 => Some(VoucherKind::ReceiptB),
      19 => Some(VoucherKind::InvoiceC),
      20 => Some(VoucherKind::DebitNoteC),
      21 => Some(VoucherKind::CreditNoteC),
      22 => Some(VoucherKind::ReceiptC),
      _ => None,
    }
  }

  /// Credit and debit notes must point at the voucher they adjust.
  pub fn is_note(&self) -> bool {
    matches!(
      self,
      VoucherKind::DebitNoteA
        | VoucherKind::CreditNoteA
        | VoucherKind::DebitNoteB
        | VoucherKind::CreditNoteB
        | VoucherKind::DebitNoteC
        | VoucherKind::CreditNoteC
    )
  }

  pub fn credit_note_for(regime: Option<TaxRegime>) -> Self {
    match regime {
      Some(TaxRegime::RegisteredTaxpayer) => VoucherKind::CreditNoteA,
      _ => VoucherKind::CreditNoteB,
    }
  }

  pub fn debit_note_for(regime: Option<TaxRegime>) -> Self {
    match regime {
      Some(TaxRegime::RegisteredTaxpayer) => VoucherKind::DebitNoteA,
      _ => VoucherKind::DebitNoteB,
    }
  }
}

impl TryFrom<u8> for VoucherKind {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "voucher kind",
      code,
    })
  }
}

impl From<VoucherKind> for u8 {
  fn from(value: VoucherKind) -> Self {
    value.code()
  }
}

// VAT Rate Code - alícuota de IVA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum VatRateCode {
  Zero,
  TenPointFive,
  TwentyOne,
  TwentySeven,
  Five,
  TwoPointFive,
  Exempt,
  NotTaxed,
  Other(u8),
}

impl VatRateCode {
  pub const DEFAULT_PERCENTAGE: Decimal = dec!(21);

  pub fn code(&self) -> u8 {
    match self {
      VatRateCode::Zero => 1,
      VatRateCode::TenPointFive => 2,
      VatRateCode::TwentyOne => 3,
      VatRateCode::TwentySeven => 4,
      VatRateCode::Five => 5,
      VatRateCode::TwoPointFive => 6,
      VatRateCode::Exempt => 7,
      VatRateCode::NotTaxed => 8,
      VatRateCode::Other(code) => *code,
    }
  }

  pub fn from_code(code: u8) -> Self {
    match code {
      1 => VatRateCode::Zero,
      2 => VatRateCode::TenPointFive,
      3 => VatRateCode::TwentyOne,
      4 => VatRateCode::TwentySeven,
      5 => VatRateCode::Five,
      6 => VatRateCode::TwoPointFive,
      7 => VatRateCode::Exempt,
      8 => VatRateCode::NotTaxed,
      other => VatRateCode::Other(other),
    }
  }

  /// Percentage for codes in the fixed table, `None` for anything else.
  pub fn percentage(&self) -> Option<Decimal> {
    match self {
      VatRateCode::Zero => Some(dec!(0)),
      VatRateCode::TenPointFive => Some(dec!(10.5)),
      VatRateCode::TwentyOne => Some(dec!(21)),
      VatRateCode::TwentySeven => Some(dec!(27)),
      VatRateCode::Five => Some(dec!(5)),
      VatRateCode::TwoPointFive => Some(dec!(2.5)),
      VatRateCode::Exempt => Some(dec!(0)),
      VatRateCode::NotTaxed => Some(dec!(0)),
      VatRateCode::Other(_) => None,
    }
  }
}

impl From<u8> for VatRateCode {
  fn from(code: u8) -> Self {
    Self::from_code(code)
  }
}

impl From<VatRateCode> for u8 {
  fn from(value: VatRateCode) -> Self {
    value.code()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ConceptKind {
  Goods,
  Services,
}

impl ConceptKind {
  pub fn code(&self) -> u8 {
    match self {
      ConceptKind::Goods => 1,
      ConceptKind::Services => 2,
    }
  }

  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(ConceptKind::Goods),
      2 => Some(ConceptKind::Services),
      _ => None,
    }
  }
}

impl TryFrom<u8> for ConceptKind {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "concept",
      code,
    })
  }
}

impl From<ConceptKind> for u8 {
  fn from(value: ConceptKind) -> Self {
    value.code()
  }
}

// Unit of Measure - unidad de medida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UnitOfMeasure {
  Kilograms,
  Meters,
  SquareMeters,
  CubicMeters,
  Liters,
  KilowattHours,
  Units,
  Pairs,
  Dozens,
  Carats,
  Thousands,
  Grams,
  Millimeters,
  CubicMillimeters,
  Kilometers,
  Hectoliters,
  Centimeters,
  Tonnes,
  Milligrams,
  Milliliters,
  Packs,
  Deposit,
  OtherUnits,
  Discount,
}

impl UnitOfMeasure {
  pub fn code(&self) -> u8 {
    match self {
      UnitOfMeasure::Kilograms => 1,
      UnitOfMeasure::Meters => 2,
      UnitOfMeasure::SquareMeters => 3,
      UnitOfMeasure::CubicMeters => 4,
      UnitOfMeasure::Liters => 5,
      UnitOfMeasure::KilowattHours => 6,
      UnitOfMeasure::Units => 7,
      UnitOfMeasure::Pairs => 8,
      UnitOfMeasure::Dozens => 9,
      UnitOfMeasure::Carats => 10,
      UnitOfMeasure::Thousands => 11,
      UnitOfMeasure::Grams => 12,
      UnitOfMeasure::Millimeters => 13,
      UnitOfMeasure::CubicMillimeters => 14,
      UnitOfMeasure::Kilometers => 15,
      UnitOfMeasure::Hectoliters => 16,
      UnitOfMeasure::Centimeters => 17,
      UnitOfMeasure::Tonnes => 20,
      UnitOfMeasure::Milligrams => 27,
      UnitOfMeasure::Milliliters => 28,
      UnitOfMeasure::Packs => 44,
      UnitOfMeasure::Deposit => 45,
      UnitOfMeasure::OtherUnits => 46,
      UnitOfMeasure::Discount => 47,
    }
  }

  pub fn from_code(code: u8) -> Option<Self> {
    let unit = match code {
      1 => UnitOfMeasure::Kilograms,
      2 => UnitOfMeasure::Meters,
      3 => UnitOfMeasure::SquareMeters,
      4 => UnitOfMeasure::CubicMeters,
      5 => UnitOfMeasure::Liters,
      6 => UnitOfMeasure::KilowattHours,
      7 => UnitOfMeasure::Units,
      8 => UnitOfMeasure::Pairs,
      9 => UnitOfMeasure::Dozens,
      10 => UnitOfMeasure::Carats,
      11 => UnitOfMeasure::Thousands,
      12 => UnitOfMeasure::Grams,
      13 => UnitOfMeasure::Millimeters,
      14 => UnitOfMeasure::CubicMillimeters,
      15 => UnitOfMeasure::Kilometers,
      16 => UnitOfMeasure::Hectoliters,
      17 => UnitOfMeasure::Centimeters,
      20 => UnitOfMeasure::Tonnes,
      27 => UnitOfMeasure::Milligrams,
      28 => UnitOfMeasure::Milliliters,
      44 => UnitOfMeasure::Packs,
      45 => UnitOfMeasure::Deposit,
      46 => UnitOfMeasure::OtherUnits,
      47 => UnitOfMeasure::Discount,
      _ => return None,
    };
    Some(unit)
  }
}

impl TryFrom<u8> for UnitOfMeasure {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "unit of measure",
      code,
    })
  }
}

impl From<UnitOfMeasure> for u8 {
  fn from(value: UnitOfMeasure) -> Self {
    value.code()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_voucher_kind_codes() {
    assert_eq!(VoucherKind::InvoiceC.code(), 19);
    assert_eq!(VoucherKind::from_code(9), Some(VoucherKind::ReceiptB));
    assert_eq!(VoucherKind::from_code(8), None);
    assert!(VoucherKind::CreditNoteB.is_note());
    assert!(!VoucherKind::InvoiceA.is_note());
  }

  #[test]
  fn test_note_kind_follows_regime() {
    assert_eq!(
      VoucherKind::credit_note_for(Some(TaxRegime::RegisteredTaxpayer)),
      VoucherKind::CreditNoteA
    );
    assert_eq!(
      VoucherKind::credit_note_for(Some(TaxRegime::SimplifiedRegime)),
      VoucherKind::CreditNoteB
    );
    assert_eq!(
      VoucherKind::debit_note_for(Some(TaxRegime::RegisteredTaxpayer)),
      VoucherKind::DebitNoteA
    );
    assert_eq!(VoucherKind::debit_note_for(None), VoucherKind::DebitNoteB);
  }

  #[test]
  fn test_vat_rate_percentages() {
    assert_eq!(VatRateCode::TwentyOne.percentage(), Some(dec!(21)));
    assert_eq!(VatRateCode::TenPointFive.percentage(), Some(dec!(10.5)));
    assert_eq!(VatRateCode::Exempt.percentage(), Some(dec!(0)));
    assert_eq!(VatRateCode::from_code(42), VatRateCode::Other(42));
    assert_eq!(VatRateCode::Other(42).percentage(), None);
  }

  #[test]
  fn test_unit_of_measure_codes() {
    assert_eq!(UnitOfMeasure::Units.code(), 7);
    assert_eq!(UnitOfMeasure::from_code(47), Some(UnitOfMeasure::Discount));
    assert_eq!(UnitOfMeasure::from_code(18), None);
    assert!(serde_json::from_str::<UnitOfMeasure>("18").is_err());
    assert_eq!(serde_json::from_str::<ConceptKind>("2").unwrap(), ConceptKind::Services);
  }
}
