pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{ClientData, ClientPatch, ClientRecord, TaxAuthorityRecord};
pub use errors::ClientError;
pub use ports::{ClientStore, TaxAuthorityLookup};
pub use services::{
  ClientDirectory, ClientFilters, ClientPage, ClientStats, DEFAULT_PAGE_SIZE, PersonKindCounts,
};
pub use value_objects::Province;
