pub mod export_report;
pub mod process_address_list;

pub use export_report::ExportReportUseCase;
pub use process_address_list::{ProcessAddressListUseCase, ProcessedBatch};
