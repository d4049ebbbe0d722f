pub mod resolve_addresses;

pub use resolve_addresses::{ResolveAddressesUseCase, ResolverSettings};
