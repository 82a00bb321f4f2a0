use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation failed: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Invoice gateway error: {0}")]
  Gateway(String),

  #[error("Invoice gateway rejected the request: {0}")]
  Rejected(String),
}
