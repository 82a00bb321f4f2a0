pub mod client;
pub mod invoice;
pub mod tax_id;
