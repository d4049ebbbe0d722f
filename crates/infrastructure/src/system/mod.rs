pub mod address_file;
pub mod hostname_resolver;

pub use address_file::FileAddressSource;
pub use hostname_resolver::SystemHostnameResolver;
