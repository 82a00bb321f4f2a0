use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::domain::client::{ClientError, TaxAuthorityLookup, TaxAuthorityRecord};
use crate::domain::tax_id;

/// Taxpayer lookup over HTTP: `GET {base_url}/consultar/{cuit}`.
pub struct HttpTaxAuthorityLookup {
  client: reqwest::Client,
  base_url: String,
}

impl HttpTaxAuthorityLookup {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| ClientError::Gateway(e.to_string()))?;

    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
    })
  }

  fn lookup_url(&self, cleaned: &str) -> String {
    format!("{}/consultar/{}", self.base_url, cleaned)
  }
}

#[async_trait]
impl TaxAuthorityLookup for HttpTaxAuthorityLookup {
  async fn lookup(&self, tax_id: &str) -> Result<Option<TaxAuthorityRecord>, ClientError> {
    let cleaned = tax_id::clean(tax_id);
    let url = self.lookup_url(&cleaned);
    tracing::debug!(%url, "Querying tax authority");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|e| ClientError::Gateway(format!("Request to {} failed: {}", url, e)))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ClientError::Gateway(format!("HTTP {}: {}", status, body)));
    }

    let record = response
      .json::<TaxAuthorityRecord>()
      .await
      .map_err(|e| ClientError::Gateway(format!("Unexpected lookup response: {}", e)))?;
    Ok(Some(record))
  }
}
