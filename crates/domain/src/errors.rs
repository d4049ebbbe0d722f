use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot read input file {path}: {reason}")]
    InputUnreadable { path: String, reason: String },

    #[error("Reverse lookup failed for {address}: {reason}")]
    LookupFailed { address: String, reason: String },

    #[error("Cannot write output file {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("Resolver initialization failed: {0}")]
    ResolverInit(String),
}
