use async_trait::async_trait;

use super::entities::{ClientRecord, TaxAuthorityRecord};
use super::errors::ClientError;

/// Persistence for the whole client record set. Reads and writes are always
/// full-set; there are no partial updates at this layer.
#[async_trait]
pub trait ClientStore: Send + Sync {
  async fn load_all(&self) -> Result<Vec<ClientRecord>, ClientError>;
  async fn save_all(&self, records: &[ClientRecord]) -> Result<(), ClientError>;
}

/// Tax authority taxpayer lookup. A miss is `Ok(None)`.
#[async_trait]
pub trait TaxAuthorityLookup: Send + Sync {
  async fn lookup(&self, tax_id: &str) -> Result<Option<TaxAuthorityRecord>, ClientError>;
}
