use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Province;
use crate::domain::tax_id::{self, DocumentKind, PersonKind, TaxRegime};

/// Client record as kept by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
  pub id: Uuid,
  pub tax_id: String,
  pub tax_id_kind: DocumentKind,
  pub person_kind: PersonKind,
  pub given_name: String,
  pub family_name: Option<String>,
  pub legal_name: Option<String>,
  pub tax_regime: TaxRegime,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub locality: Option<String>,
  pub province: Option<Province>,
  pub postal_code: Option<String>,
  pub country: Option<String>,
  pub notes: Option<String>,
  pub created_at: DateTime<Utc>,
  pub modified_at: DateTime<Utc>,
  pub active: bool,
}

/// Fields supplied when creating a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientData {
  pub tax_id: String,
  pub tax_id_kind: DocumentKind,
  pub person_kind: PersonKind,
  pub given_name: String,
  pub family_name: Option<String>,
  pub legal_name: Option<String>,
  pub tax_regime: TaxRegime,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub locality: Option<String>,
  pub province: Option<Province>,
  pub postal_code: Option<String>,
  pub country: Option<String>,
  pub notes: Option<String>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientPatch {
  pub tax_id: Option<String>,
  pub tax_id_kind: Option<DocumentKind>,
  pub person_kind: Option<PersonKind>,
  pub given_name: Option<String>,
  pub family_name: Option<String>,
  pub legal_name: Option<String>,
  pub tax_regime: Option<TaxRegime>,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub locality: Option<String>,
  pub province: Option<Province>,
  pub postal_code: Option<String>,
  pub country: Option<String>,
  pub notes: Option<String>,
}

impl ClientRecord {
  pub fn new(data: ClientData) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      tax_id: tax_id::clean(&data.tax_id),
      tax_id_kind: data.tax_id_kind,
      person_kind: data.person_kind,
      given_name: data.given_name,
      family_name: data.family_name,
      legal_name: data.legal_name,
      tax_regime: data.tax_regime,
      email: data.email,
      phone: data.phone,
      address: data.address,
      locality: data.locality,
      province: data.province,
      postal_code: data.postal_code,
      country: data.country,
      notes: data.notes,
      created_at: now,
      modified_at: now,
      active: true,
    }
  }

  pub fn apply(&mut self, patch: ClientPatch) {
    if let Some(value) = patch.tax_id {
      self.tax_id = tax_id::clean(&value);
    }
    if let Some(value) = patch.tax_id_kind {
      self.tax_id_kind = value;
    }
    if let Some(value) = patch.person_kind {
      self.person_kind = value;
    }
    if let Some(value) = patch.given_name {
      self.given_name = value;
    }
    if let Some(value) = patch.tax_regime {
      self.tax_regime = value;
    }
    if let Some(value) = patch.province {
      self.province = Some(value);
    }

    let optional_fields = [
      (&mut self.family_name, patch.family_name),
      (&mut self.legal_name, patch.legal_name),
      (&mut self.email, patch.email),
      (&mut self.phone, patch.phone),
      (&mut self.address, patch.address),
      (&mut self.locality, patch.locality),
      (&mut self.postal_code, patch.postal_code),
      (&mut self.country, patch.country),
      (&mut self.notes, patch.notes),
    ];
    for (field, value) in optional_fields {
      if value.is_some() {
        *field = value;
      }
    }

    self.touch();
  }

  pub fn deactivate(&mut self) {
    self.active = false;
    self.touch();
  }

  pub fn reactivate(&mut self) {
    self.active = true;
    self.touch();
  }

  /// Name shown in listings: legal name for organizations, "given family"
  /// for individuals.
  pub fn display_name(&self) -> String {
    match (self.person_kind, &self.legal_name, &self.family_name) {
      (PersonKind::Organization, Some(legal_name), _) if !legal_name.is_empty() => {
        legal_name.clone()
      }
      (_, _, Some(family_name)) if !family_name.is_empty() => {
        format!("{} {}", self.given_name, family_name)
      }
      _ => self.given_name.clone(),
    }
  }

  pub fn has_tax_id(&self, candidate: &str) -> bool {
    self.tax_id == tax_id::clean(candidate)
  }

  fn touch(&mut self) {
    self.modified_at = Utc::now().max(self.created_at);
  }
}

/// Taxpayer data as returned by the tax authority lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAuthorityRecord {
  #[serde(rename = "cuit")]
  pub tax_id: String,
  #[serde(rename = "razonSocial", default)]
  pub legal_name: Option<String>,
  #[serde(rename = "nombre", default)]
  pub given_name: Option<String>,
  #[serde(rename = "apellido", default)]
  pub family_name: Option<String>,
  #[serde(rename = "tipoPersona")]
  pub person_kind: String,
  #[serde(rename = "condicionImpositiva")]
  pub tax_regime: String,
  #[serde(rename = "domicilio", default)]
  pub address: Option<String>,
  #[serde(rename = "localidad", default)]
  pub locality: Option<String>,
  #[serde(rename = "provincia", default)]
  pub province: Option<String>,
  #[serde(rename = "codigoPostal", default)]
  pub postal_code: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(rename = "telefono", default)]
  pub phone: Option<String>,
  #[serde(rename = "fechaInscripcion", default)]
  pub registration_date: Option<String>,
  #[serde(rename = "estado", default)]
  pub status: Option<String>,
}

impl TaxAuthorityRecord {
  /// Maps the lookup result into creation data, classifying its free-text
  /// labels into code tables.
  pub fn into_client_data(self) -> ClientData {
    let cleaned = tax_id::clean(&self.tax_id);
    let legal_name = non_empty(self.legal_name);
    let given_name = non_empty(self.given_name);
    let province = non_empty(self.province).and_then(|label| {
      let province = Province::from_label(&label);
      if province.is_none() {
        tracing::warn!(label = %label, "Unrecognized province label from tax authority");
      }
      province
    });

    ClientData {
      tax_id_kind: tax_id::classify_document_kind(&cleaned),
      tax_id: cleaned,
      person_kind: tax_id::map_person_kind(&self.person_kind),
      given_name: given_name.or_else(|| legal_name.clone()).unwrap_or_default(),
      family_name: non_empty(self.family_name),
      legal_name,
      tax_regime: tax_id::map_tax_regime(&self.tax_regime),
      email: non_empty(self.email),
      phone: non_empty(self.phone),
      address: non_empty(self.address),
      locality: non_empty(self.locality),
      province,
      postal_code: non_empty(self.postal_code),
      country: None,
      notes: None,
    }
  }
}

/// Lookup responses use empty strings for absent fields.
fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}
