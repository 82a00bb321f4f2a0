pub mod validate_tax_id;

pub use validate_tax_id::{ValidateTaxIdCommand, ValidateTaxIdResponse, ValidateTaxIdUseCase};
