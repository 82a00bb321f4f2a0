//! CUIT/CUIL handling: normalization, display formatting, check digit
//! validation and mapping of tax authority labels into code tables.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::TaxIdError;
pub use services::{
  classify_document_kind, clean, format, map_person_kind, map_tax_regime, validate,
};
pub use value_objects::{DocumentKind, PersonKind, TaxId, TaxRegime, UnknownCode};
