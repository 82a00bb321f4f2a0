use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{ClientData, ClientFilters, ClientPatch, Province};
use crate::domain::invoice::{EmissionRequest, InvoiceLineItem};
use crate::domain::tax_id::{self, DocumentKind, PersonKind, TaxRegime};

/// Request to check a CUIT/CUIL
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateTaxIdRequest {
  #[validate(length(min = 1, message = "El CUIT es obligatorio"))]
  pub tax_id: String,
}

/// Query string for the client listing
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListClientsQuery {
  pub search: Option<String>,
  pub person_kind: Option<PersonKind>,
  pub tax_regime: Option<TaxRegime>,
  pub active: Option<bool>,
  #[validate(range(min = 1, message = "page must be at least 1"))]
  pub page: Option<usize>,
  #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
  pub page_size: Option<usize>,
}

impl ListClientsQuery {
  pub fn filters(&self) -> ClientFilters {
    ClientFilters {
      search: self.search.clone(),
      person_kind: self.person_kind,
      tax_regime: self.tax_regime,
      active: self.active,
    }
  }
}

/// Request to create a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientRequest {
  #[validate(length(min = 1, message = "El documento es obligatorio"))]
  pub tax_id: String,

  /// Inferred from the number length when omitted
  pub tax_id_kind: Option<DocumentKind>,

  pub person_kind: PersonKind,

  #[validate(length(max = 255, message = "El nombre no puede superar 255 caracteres"))]
  pub given_name: String,

  pub family_name: Option<String>,
  pub legal_name: Option<String>,
  pub tax_regime: TaxRegime,

  #[validate(email(message = "El email no es válido"))]
  pub email: Option<String>,

  pub phone: Option<String>,
  pub address: Option<String>,
  pub locality: Option<String>,
  pub province: Option<Province>,
  pub postal_code: Option<String>,
  pub country: Option<String>,
  pub notes: Option<String>,
}

impl From<CreateClientRequest> for ClientData {
  fn from(request: CreateClientRequest) -> Self {
    let tax_id_kind = request
      .tax_id_kind
      .unwrap_or_else(|| tax_id::classify_document_kind(&tax_id::clean(&request.tax_id)));

    ClientData {
      tax_id: request.tax_id,
      tax_id_kind,
      person_kind: request.person_kind,
      given_name: request.given_name,
      family_name: request.family_name,
      legal_name: request.legal_name,
      tax_regime: request.tax_regime,
      email: request.email,
      phone: request.phone,
      address: request.address,
      locality: request.locality,
      province: request.province,
      postal_code: request.postal_code,
      country: request.country,
      notes: request.notes,
    }
  }
}

/// Partial client update; omitted fields are kept
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
  #[validate(length(min = 1, message = "El documento es obligatorio"))]
  pub tax_id: Option<String>,
  pub tax_id_kind: Option<DocumentKind>,
  pub person_kind: Option<PersonKind>,
  pub given_name: Option<String>,
  pub family_name: Option<String>,
  pub legal_name: Option<String>,
  pub tax_regime: Option<TaxRegime>,
  #[validate(email(message = "El email no es válido"))]
  pub email: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub locality: Option<String>,
  pub province: Option<Province>,
  pub postal_code: Option<String>,
  pub country: Option<String>,
  pub notes: Option<String>,
}

impl From<UpdateClientRequest> for ClientPatch {
  fn from(request: UpdateClientRequest) -> Self {
    ClientPatch {
      tax_id: request.tax_id,
      tax_id_kind: request.tax_id_kind,
      person_kind: request.person_kind,
      given_name: request.given_name,
      family_name: request.family_name,
      legal_name: request.legal_name,
      tax_regime: request.tax_regime,
      email: request.email,
      phone: request.phone,
      address: request.address,
      locality: request.locality,
      province: request.province,
      postal_code: request.postal_code,
      country: request.country,
      notes: request.notes,
    }
  }
}

/// Request to import a client from the tax authority
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImportClientRequest {
  #[validate(length(min = 1, message = "El CUIT es obligatorio"))]
  pub tax_id: String,
}

/// Line items for a totals preview
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateTotalsRequest {
  #[serde(alias = "Items")]
  pub items: Vec<InvoiceLineItem>,
}

/// Credit or debit note against an existing voucher
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueNoteRequest {
  #[validate(length(min = 1, message = "El comprobante relacionado es obligatorio"))]
  pub related_voucher: String,

  pub request: EmissionRequest,
}

/// Request to cancel a voucher
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CancelVoucherRequest {
  #[validate(length(min = 1, message = "El motivo de anulación es obligatorio"))]
  pub reason: String,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Every violated rule, for validation errors
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
