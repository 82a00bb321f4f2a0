use async_trait::async_trait;

use super::entities::{EmissionRequest, EmittedVoucher, GatewayResponse};
use super::errors::InvoiceError;

/// Electronic invoice emission API. Transport failures are
/// `InvoiceError::Gateway`; a well-formed answer with `success == false` is
/// returned as-is for the service to interpret.
#[async_trait]
pub trait InvoiceGateway: Send + Sync {
  async fn emit(
    &self,
    request: &EmissionRequest,
  ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError>;

  async fn fetch_voucher(
    &self,
    hash: &str,
  ) -> Result<GatewayResponse<EmittedVoucher>, InvoiceError>;

  async fn cancel_voucher(
    &self,
    hash: &str,
    reason: &str,
  ) -> Result<GatewayResponse<serde_json::Value>, InvoiceError>;

  async fn sales_points(&self) -> Result<GatewayResponse<serde_json::Value>, InvoiceError>;
}
