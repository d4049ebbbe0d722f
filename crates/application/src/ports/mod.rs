mod address_source;
mod hostname_resolver;
mod report_writer;

pub use address_source::AddressSource;
pub use hostname_resolver::HostnameResolver;
pub use report_writer::{ReportRow, ReportWriter};
