pub mod config;
pub mod types;

pub use config::{PgpickConfig, ProbeConfig, ProvisionConfig};
pub use types::*;
