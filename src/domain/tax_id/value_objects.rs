use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::TaxIdError;
use super::services;

/// A validated, normalized CUIT/CUIL (11 digits, no separators).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl TaxId {
  pub fn parse(input: &str) -> Result<Self, TaxIdError> {
    services::validate(input)?;
    Ok(Self(services::clean(input)))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  /// Hyphenated display form, `DD-DDDDDDDD-D`.
  pub fn formatted(&self) -> String {
    services::format(&self.0)
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for TaxId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.formatted())
  }
}

impl TryFrom<String> for TaxId {
  type Error = TaxIdError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::parse(&value)
  }
}

impl From<TaxId> for String {
  fn from(value: TaxId) -> Self {
    value.0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
  pub kind: &'static str,
  pub code: u8,
}

/// Document kind codes accepted by the tax authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DocumentKind {
  Cuit,
  Cuil,
  Cdi,
  LibretaEnrolamiento,
  LibretaCivica,
  ForeignId,
  Dni,
  FederalPoliceId,
  Other,
}

impl DocumentKind {
  pub fn code(&self) -> u8 {
    match self {
      DocumentKind::Cuit => 1,
      DocumentKind::Cuil => 2,
      DocumentKind::Cdi => 3,
      DocumentKind::LibretaEnrolamiento => 4,
      DocumentKind::LibretaCivica => 5,
      DocumentKind::ForeignId => 6,
      DocumentKind::Dni => 10,
      DocumentKind::FederalPoliceId => 12,
      DocumentKind::Other => 36,
    }
  }

  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(DocumentKind::Cuit),
      2 => Some(DocumentKind::Cuil),
      3 => Some(DocumentKind::Cdi),
      4 => Some(DocumentKind::LibretaEnrolamiento),
      5 => Some(DocumentKind::LibretaCivica),
      6 => Some(DocumentKind::ForeignId),
      10 => Some(DocumentKind::Dni),
      12 => Some(DocumentKind::FederalPoliceId),
      36 => Some(DocumentKind::Other),
      _ => None,
    }
  }
}

impl TryFrom<u8> for DocumentKind {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "document kind",
      code,
    })
  }
}

impl From<DocumentKind> for u8 {
  fn from(value: DocumentKind) -> Self {
    value.code()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PersonKind {
  /// Persona física
  Individual,
  /// Persona jurídica
  Organization,
}

impl PersonKind {
  pub fn code(&self) -> u8 {
    match self {
      PersonKind::Individual => 1,
      PersonKind::Organization => 2,
    }
  }

  pub fn from_code(code: u8) -> Option<Self> {
    match code {
      1 => Some(PersonKind::Individual),
      2 => Some(PersonKind::Organization),
      _ => None,
    }
  }
}

impl TryFrom<u8> for PersonKind {
  type Error = UnknownCode;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    Self::from_code(code).ok_or(UnknownCode {
      kind: "person kind",
      code,
    })
  }
}

impl From<PersonKind> for u8 {
  fn from(value: PersonKind) -> Self {
    value.code()
  }
}

/// Registration category of a taxpayer (condición impositiva).
///
/// Codes outside the fixed table are kept as `Other` so stored records
/// written by other tools survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TaxRegime {
  RegisteredTaxpayer,
  Exempt,
  SimplifiedRegime,
  FinalConsumer,
  Other(u8),
}

impl TaxRegime {
  pub fn code(&self) -> u8 {
    match self {
      TaxRegime::RegisteredTaxpayer => 1,
      TaxRegime::Exempt => 2,
      TaxRegime::SimplifiedRegime => 3,
      TaxRegime::FinalConsumer => 4,
      TaxRegime::Other(code) => *code,
    }
  }

  pub fn from_code(code: u8) -> Self {
    match code {
      1 => TaxRegime::RegisteredTaxpayer,
      2 => TaxRegime::Exempt,
      3 => TaxRegime::SimplifiedRegime,
      4 => TaxRegime::FinalConsumer,
      other => TaxRegime::Other(other),
    }
  }

  /// Zero is what an empty form field decodes to.
  pub fn is_missing(&self) -> bool {
    self.code() == 0
  }

  pub fn label(&self) -> &'static str {
    match self {
      TaxRegime::RegisteredTaxpayer => "Responsable Inscripto",
      TaxRegime::Exempt => "Exento",
      TaxRegime::SimplifiedRegime => "Monotributo",
      TaxRegime::FinalConsumer => "Consumidor Final",
      TaxRegime::Other(_) => "Desconocido",
    }
  }
}

impl From<u8> for TaxRegime {
  fn from(code: u8) -> Self {
    Self::from_code(code)
  }
}

impl From<TaxRegime> for u8 {
  fn from(value: TaxRegime) -> Self {
    value.code()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tax_id_parse_normalizes() {
    let tax_id = TaxId::parse("20-12345678-6").unwrap();
    assert_eq!(tax_id.value(), "20123456786");
    assert_eq!(tax_id.to_string(), "20-12345678-6");
    assert!(TaxId::parse("20-12345678-9").is_err());
  }

  #[test]
  fn test_tax_id_serde_rejects_invalid() {
    let ok: TaxId = serde_json::from_str("\"20123456786\"").unwrap();
    assert_eq!(ok.value(), "20123456786");
    assert!(serde_json::from_str::<TaxId>("\"123\"").is_err());
    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"20123456786\"");
  }

  #[test]
  fn test_document_kind_codes() {
    assert_eq!(DocumentKind::Dni.code(), 10);
    assert_eq!(DocumentKind::from_code(36), Some(DocumentKind::Other));
    assert_eq!(DocumentKind::from_code(7), None);
    assert!(serde_json::from_str::<DocumentKind>("7").is_err());
    assert_eq!(serde_json::to_string(&DocumentKind::Cuil).unwrap(), "2");
  }

  #[test]
  fn test_tax_regime_keeps_unknown_codes() {
    let regime: TaxRegime = serde_json::from_str("9").unwrap();
    assert_eq!(regime, TaxRegime::Other(9));
    assert_eq!(regime.label(), "Desconocido");
    assert_eq!(serde_json::to_string(&regime).unwrap(), "9");
    assert!(TaxRegime::from_code(0).is_missing());
    assert!(!TaxRegime::SimplifiedRegime.is_missing());
  }
}
