pub mod ifactura_client;
pub mod simulated_lookup;
pub mod tax_authority_client;

pub use ifactura_client::{ApiCredentials, IFacturaClient};
pub use simulated_lookup::SimulatedTaxAuthorityLookup;
pub use tax_authority_client::HttpTaxAuthorityLookup;
