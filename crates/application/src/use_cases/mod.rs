pub mod batch;
pub mod lookups;

// Re-export use cases
pub use batch::{ExportReportUseCase, ProcessAddressListUseCase, ProcessedBatch};
pub use lookups::{ResolveAddressesUseCase, ResolverSettings};
