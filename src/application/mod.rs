//! Use cases orchestrating the domain services. Each one takes a command,
//! calls into the domain and shapes a response for the HTTP adapter.

pub mod client;
pub mod invoice;
pub mod tax_id;
