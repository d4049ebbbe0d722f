pub mod blocking_pool;
pub mod report_formatter;

pub use blocking_pool::BlockingLookupPool;
pub use report_formatter::{format_console_line, normalize_csv_path, REPORT_HEADER};
