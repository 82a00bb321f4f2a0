use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxIdError {
  #[error("El CUIT debe tener 11 dígitos (se encontraron {found})")]
  InvalidLength { found: usize },

  #[error("El dígito verificador del CUIT es incorrecto")]
  InvalidChecksum { expected: u32, found: u32 },
}
