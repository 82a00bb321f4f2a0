pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;

pub use dtos::{ErrorResponse, SuccessResponse};
pub use errors::ApiError;
pub use routes::{
  ClientRouteDependencies, InvoiceRouteDependencies, configure_client_routes,
  configure_invoice_routes, configure_tax_id_routes,
};
