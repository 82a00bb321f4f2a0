use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::invoice::{
  EmissionRequest, EmittedVoucher, GatewayResponse, InvoiceError, InvoiceGateway,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCredentials {
  #[serde(rename = "Email")]
  pub email: String,
  #[serde(rename = "Password")]
  pub password: String,
}

/// Every iFactura call carries the account credentials next to its payload.
#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
  #[serde(rename = "APIJson")]
  credentials: &'a ApiCredentials,
  #[serde(flatten)]
  body: T,
}

#[derive(Debug, Serialize)]
struct VoucherRef<'a> {
  #[serde(rename = "Hash")]
  hash: &'a str,
}

#[derive(Debug, Serialize)]
struct CancelVoucher<'a> {
  #[serde(rename = "Hash")]
  hash: &'a str,
  #[serde(rename = "Motivo")]
  reason: &'a str,
}

#[derive(Debug, Serialize)]
struct NoBody {}

pub struct IFacturaClient {
  client: Client,
  base_url: String,
  credentials: ApiCredentials,
}

impl IFacturaClient {
  pub fn new(
    base_url: impl Into<String>,
    credentials: ApiCredentials,
    timeout: Duration,
  ) -> Result<Self, InvoiceError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| InvoiceError::Gateway(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
      credentials,
    })
  }

  fn envelope<T: Serialize>(&self, body: T) -> Envelope<'_, T> {
    Envelope {
      credentials: &self.credentials,
      body,
    }
  }

  async fn call<B, R>(&self, operation: &str, body: B) -> Result<GatewayResponse<R>, InvoiceError>
  where
    B: Serialize + Send,
    R: DeserializeOwned,
  {
    let url = format!("{}/{}", self.base_url, operation);
    tracing::debug!(%url, "Calling invoice gateway");

    let response = self
      .client
      .post(&url)
      .json(&self.envelope(body))
      .send()
      .await
      .map_err(|e| InvoiceError::Gateway(format!("Failed to reach {}: {}", operation, e)))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(InvoiceError::Gateway(format!(
        "{} returned status {}: {}",
        operation, status, body
      )));
    }

    response
      .json::<GatewayResponse<R>>()
      .await
      .map_err(|e| InvoiceError::Gateway(format!("Failed to parse {} response: {}", operation, e)))
  }
}

#[async_trait]
impl InvoiceGateway for IFacturaClient {
  async fn emit(
    &self,
    request: &EmissionRequest,
  ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError> {
    self.call("EmitirFactura", request).await
  }

  async fn fetch_voucher(
    &self,
    hash: &str,
  ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError> {
    self.call("ObtenerComprobante", VoucherRef { hash }).await
  }

  async fn cancel_voucher(
    &self,
    hash: &str,
    reason: &str,
  ) -> Result<GatewayResponse<serde_json::Value>, InvoiceError> {
    self
      .call("AnularComprobante", CancelVoucher { hash, reason })
      .await
  }

  async fn sales_points(&self) -> Result<GatewayResponse<serde_json::Value>, InvoiceError> {
    self.call("ObtenerPuntosVenta", NoBody {}).await
  }
}
