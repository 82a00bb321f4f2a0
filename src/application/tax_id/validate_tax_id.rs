use serde::{Deserialize, Serialize};

use crate::domain::tax_id::{self, DocumentKind, TaxId};

#[derive(Debug, Deserialize)]
pub struct ValidateTaxIdCommand {
  pub tax_id: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ValidateTaxIdResponse {
  pub normalized: String,
  pub formatted: String,
  pub valid: bool,
  pub document_kind: DocumentKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

/// Checks a number without touching the directory. An invalid number is a
/// normal answer here, not an error.
#[derive(Debug, Default)]
pub struct ValidateTaxIdUseCase;

impl ValidateTaxIdUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: ValidateTaxIdCommand) -> ValidateTaxIdResponse {
    let normalized = tax_id::clean(&command.tax_id);
    let document_kind = tax_id::classify_document_kind(&normalized);

    match TaxId::parse(&command.tax_id) {
      Ok(parsed) => ValidateTaxIdResponse {
        formatted: parsed.formatted(),
        normalized: parsed.into_inner(),
        valid: true,
        document_kind,
        error: None,
      },
      Err(err) => ValidateTaxIdResponse {
        formatted: tax_id::format(&command.tax_id),
        normalized,
        valid: false,
        document_kind,
        error: Some(err.to_string()),
      },
    }
  }
}
