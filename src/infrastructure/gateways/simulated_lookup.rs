//! Canned tax authority answers for local development.
//!
//! Enable with `AFIPDESK_LOOKUP__SIMULATED=true`. Only the four sample
//! taxpayers below are known; every other number is a miss.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::client::{ClientError, TaxAuthorityLookup, TaxAuthorityRecord};
use crate::domain::tax_id;

const CABA: &str = "Ciudad Autónoma de Buenos Aires";

pub struct SimulatedTaxAuthorityLookup {
  records: HashMap<String, TaxAuthorityRecord>,
  latency: Duration,
}

impl SimulatedTaxAuthorityLookup {
  pub fn new(latency: Duration) -> Self {
    let records = sample_records()
      .into_iter()
      .map(|record| (record.tax_id.clone(), record))
      .collect();
    Self { records, latency }
  }
}

impl Default for SimulatedTaxAuthorityLookup {
  fn default() -> Self {
    Self::new(Duration::from_millis(500))
  }
}

#[async_trait]
impl TaxAuthorityLookup for SimulatedTaxAuthorityLookup {
  async fn lookup(&self, tax_id: &str) -> Result<Option<TaxAuthorityRecord>, ClientError> {
    tokio::time::sleep(self.latency).await;
    Ok(self.records.get(&tax_id::clean(tax_id)).cloned())
  }
}

struct Sample {
  tax_id: &'static str,
  legal_name: Option<&'static str>,
  given_name: Option<&'static str>,
  family_name: Option<&'static str>,
  person_kind: &'static str,
  tax_regime: &'static str,
  address: &'static str,
  postal_code: &'static str,
  email: &'static str,
  phone: &'static str,
  registered_on: &'static str,
}

impl From<Sample> for TaxAuthorityRecord {
  fn from(sample: Sample) -> Self {
    TaxAuthorityRecord {
      tax_id: sample.tax_id.to_string(),
      legal_name: sample.legal_name.map(str::to_string),
      given_name: sample.given_name.map(str::to_string),
      family_name: sample.family_name.map(str::to_string),
      person_kind: sample.person_kind.to_string(),
      tax_regime: sample.tax_regime.to_string(),
      address: Some(sample.address.to_string()),
      locality: Some(CABA.to_string()),
      province: Some(CABA.to_string()),
      postal_code: Some(sample.postal_code.to_string()),
      email: Some(sample.email.to_string()),
      phone: Some(sample.phone.to_string()),
      registration_date: Some(sample.registered_on.to_string()),
      status: Some("Activo".to_string()),
    }
  }
}

fn sample_records() -> Vec<TaxAuthorityRecord> {
  [
    Sample {
      tax_id: "20123456789",
      legal_name: Some("EMPRESA EJEMPLO S.A."),
      given_name: None,
      family_name: None,
      person_kind: "JURIDICA",
      tax_regime: "Responsable Inscripto",
      address: "Av. Corrientes 1234",
      postal_code: "1043",
      email: "contacto@empresaejemplo.com",
      phone: "011-1234-5678",
      registered_on: "2020-01-15",
    },
    Sample {
      tax_id: "20345678901",
      legal_name: Some("COMERCIO XYZ S.R.L."),
      given_name: None,
      family_name: None,
      person_kind: "JURIDICA",
      tax_regime: "Responsable Inscripto",
      address: "Calle Florida 567",
      postal_code: "1005",
      email: "info@comercioxyz.com",
      phone: "011-9876-5432",
      registered_on: "2019-06-20",
    },
    Sample {
      tax_id: "20123456780",
      legal_name: None,
      given_name: Some("Juan Carlos"),
      family_name: Some("Pérez González"),
      person_kind: "FISICA",
      tax_regime: "Monotributo",
      address: "Av. Santa Fe 789",
      postal_code: "1059",
      email: "juan.perez@email.com",
      phone: "011-4567-8901",
      registered_on: "2021-03-10",
    },
    Sample {
      tax_id: "20234567890",
      legal_name: None,
      given_name: Some("María Elena"),
      family_name: Some("Rodríguez López"),
      person_kind: "FISICA",
      tax_regime: "Consumidor Final",
      address: "Calle Lavalle 456",
      postal_code: "1047",
      email: "maria.rodriguez@email.com",
      phone: "011-2345-6789",
      registered_on: "2022-08-15",
    },
  ]
  .into_iter()
  .map(TaxAuthorityRecord::from)
  .collect()
}
