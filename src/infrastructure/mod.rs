pub mod config;
pub mod gateways;
pub mod persistence;
