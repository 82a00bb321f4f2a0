pub mod calculator;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use calculator::{
  ValidationReport, compute_totals, validate_client, validate_line_items, vat_percentage,
};
pub use entities::{
  EmissionRequest, EmittedVoucher, GatewayResponse, InvoiceClient, InvoiceLineItem,
  InvoiceTotals, round_currency,
};
pub use errors::InvoiceError;
pub use ports::InvoiceGateway;
pub use services::InvoiceService;
pub use value_objects::{ConceptKind, UnitOfMeasure, VatRateCode, VoucherKind};
