pub mod clients;
pub mod invoices;
pub mod tax_ids;
