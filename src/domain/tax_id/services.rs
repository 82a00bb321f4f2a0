use super::errors::TaxIdError;
use super::value_objects::{DocumentKind, PersonKind, TaxRegime};

const CHECKSUM_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
const TAX_ID_LENGTH: usize = 11;

/// Strips every non-digit character.
pub fn clean(input: &str) -> String {
  input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Renders `DD-DDDDDDDD-D` when the input cleans to exactly 11 digits,
/// otherwise hands the input back untouched.
pub fn format(input: &str) -> String {
  let cleaned = clean(input);
  if cleaned.len() != TAX_ID_LENGTH {
    return input.to_string();
  }
  format!("{}-{}-{}", &cleaned[..2], &cleaned[2..10], &cleaned[10..])
}

/// Checks length and the weighted mod-11 check digit.
///
/// A remainder of 1 asks for a check digit of 10, which no single digit can
/// satisfy, so those numbers are always rejected.
pub fn validate(input: &str) -> Result<(), TaxIdError> {
  let digits: Vec<u32> = clean(input)
    .chars()
    .filter_map(|c| c.to_digit(10))
    .collect();

  if digits.len() != TAX_ID_LENGTH {
    return Err(TaxIdError::InvalidLength {
      found: digits.len(),
    });
  }

  let sum: u32 = digits
    .iter()
    .zip(CHECKSUM_WEIGHTS.iter())
    .map(|(digit, weight)| digit * weight)
    .sum();

  let remainder = sum % 11;
  let expected = if remainder == 0 { 0 } else { 11 - remainder };
  let found = digits[TAX_ID_LENGTH - 1];

  if expected != found {
    return Err(TaxIdError::InvalidChecksum { expected, found });
  }

  Ok(())
}

/// Infers the document kind from the length of an already cleaned number.
pub fn classify_document_kind(cleaned: &str) -> DocumentKind {
  match cleaned.chars().count() {
    11 => DocumentKind::Cuit,
    10 => DocumentKind::Cuil,
    8 => DocumentKind::Dni,
    other => {
      tracing::warn!(
        length = other,
        "Unrecognized document length, defaulting to CUIT"
      );
      DocumentKind::Cuit
    }
  }
}

/// Maps a free-text regime label from the tax authority into a regime code.
pub fn map_tax_regime(label: &str) -> TaxRegime {
  let normalized = label.to_lowercase();

  if normalized.contains("responsable inscripto") {
    TaxRegime::RegisteredTaxpayer
  } else if normalized.contains("exento") {
    TaxRegime::Exempt
  } else if normalized.contains("monotributo") {
    TaxRegime::SimplifiedRegime
  } else {
    if !normalized.contains("consumidor final") {
      tracing::warn!(label, "Unrecognized tax regime label, defaulting to Consumidor Final");
    }
    TaxRegime::FinalConsumer
  }
}

/// Maps a free-text person kind label ("FISICA", "JURIDICA", ...) into a code.
pub fn map_person_kind(label: &str) -> PersonKind {
  let normalized = label.to_lowercase();

  if ["fisica", "física", "individual"]
    .iter()
    .any(|needle| normalized.contains(needle))
  {
    return PersonKind::Individual;
  }

  if !["juridica", "jurídica", "organization"]
    .iter()
    .any(|needle| normalized.contains(needle))
  {
    tracing::warn!(label, "Unrecognized person kind label, defaulting to Organization");
  }
  PersonKind::Organization
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clean_strips_separators() {
    assert_eq!(clean("20-12345678-6"), "20123456786");
    assert_eq!(clean(" 20.123.456 "), "20123456");
    assert_eq!(clean("abc"), "");
  }

  #[test]
  fn test_format() {
    assert_eq!(format("20123456789"), "20-12345678-9");
    assert_eq!(format("20 12345678 9"), "20-12345678-9");
    assert_eq!(format("2012345678"), "2012345678");
    assert_eq!(format("12-34"), "12-34");
  }

  #[test]
  fn test_clean_format_idempotent() {
    for input in ["20123456789", "20-12345678-9", "20.12345678.9"] {
      let once = clean(&format(&clean(input)));
      assert_eq!(once, clean(input));
      assert_eq!(clean(&format(&once)), once);
    }
  }

  #[test]
  fn test_validate_accepts_valid_numbers() {
    // remainder 5 -> check digit 6
    assert!(validate("20123456786").is_ok());
    assert!(validate("20-12345678-6").is_ok());
    // remainder 10 -> check digit 1
    assert!(validate("30712345671").is_ok());
    // remainder 0 -> check digit 0
    assert!(validate("20000000060").is_ok());
  }

  #[test]
  fn test_validate_rejects_last_digit_mutations() {
    for valid in ["20123456786", "30712345671", "20000000060"] {
      let prefix = &valid[..10];
      let check = valid.chars().last().unwrap();
      for digit in '0'..='9' {
        if digit == check {
          continue;
        }
        let mutated = format!("{}{}", prefix, digit);
        assert!(
          matches!(validate(&mutated), Err(TaxIdError::InvalidChecksum { .. })),
          "{} should be rejected",
          mutated
        );
      }
    }
  }

  #[test]
  fn test_validate_rejects_expected_ten() {
    // weighted sum 12, remainder 1, would need check digit 10
    for digit in 0..=9 {
      let candidate = format!("2000000001{}", digit);
      assert_eq!(
        validate(&candidate),
        Err(TaxIdError::InvalidChecksum {
          expected: 10,
          found: digit
        })
      );
    }
  }

  #[test]
  fn test_validate_length() {
    assert_eq!(
      validate("2012345678"),
      Err(TaxIdError::InvalidLength { found: 10 })
    );
    assert_eq!(validate(""), Err(TaxIdError::InvalidLength { found: 0 }));
    assert_eq!(
      validate("201234567861"),
      Err(TaxIdError::InvalidLength { found: 12 })
    );
  }

  #[test]
  fn test_classify_document_kind() {
    assert_eq!(classify_document_kind("20123456786"), DocumentKind::Cuit);
    assert_eq!(classify_document_kind("2012345678"), DocumentKind::Cuil);
    assert_eq!(classify_document_kind("12345678"), DocumentKind::Dni);
    assert_eq!(classify_document_kind("123"), DocumentKind::Cuit);
  }

  #[test]
  fn test_map_tax_regime() {
    assert_eq!(
      map_tax_regime("Responsable Inscripto"),
      TaxRegime::RegisteredTaxpayer
    );
    assert_eq!(map_tax_regime("IVA EXENTO"), TaxRegime::Exempt);
    assert_eq!(map_tax_regime("monotributo social"), TaxRegime::SimplifiedRegime);
    assert_eq!(map_tax_regime("Consumidor Final"), TaxRegime::FinalConsumer);
    assert_eq!(map_tax_regime("whatever"), TaxRegime::FinalConsumer);
  }

  #[test]
  fn test_map_person_kind() {
    assert_eq!(map_person_kind("FISICA"), PersonKind::Individual);
    assert_eq!(map_person_kind("Persona Física"), PersonKind::Individual);
    assert_eq!(map_person_kind("JURIDICA"), PersonKind::Organization);
    assert_eq!(map_person_kind(""), PersonKind::Organization);
  }
}
