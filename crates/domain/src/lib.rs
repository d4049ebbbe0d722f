//! Ferrous rDNS Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod lookup;

pub use address::{is_valid_address, InputLine};
pub use config::{CliOverrides, Config, ConfigError, ResolverBackend};
pub use errors::DomainError;
pub use lookup::{LookupOutcome, LookupResult, ResultTable};
