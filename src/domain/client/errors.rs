use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Client not found: {0}")]
  NotFound(Uuid),

  #[error("A client with tax ID {0} already exists")]
  DuplicateTaxId(String),

  #[error("Validation failed: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Tax authority lookup failed: {0}")]
  Gateway(String),

  #[error("Storage error: {0}")]
  Storage(String),
}

impl From<serde_json::Error> for ClientError {
  fn from(error: serde_json::Error) -> Self {
    ClientError::Storage(format!("Malformed client data: {}", error))
  }
}
