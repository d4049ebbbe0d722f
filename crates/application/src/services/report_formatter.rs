use ferrous_rdns_domain::{InputLine, ResultTable};
use std::path::PathBuf;

pub const REPORT_HEADER: [&str; 2] = ["hostname", "ip"];

const CSV_EXTENSION: &str = ".csv";

/// Console line for one input line; `None` for blanks and comments.
pub fn format_console_line(line: &InputLine, table: &ResultTable) -> Option<String> {
    match line {
        InputLine::Skipped => None,
        InputLine::Invalid(text) => Some(format!("Invalid IP format:{}", text)),
        InputLine::Address { text, .. } => Some(format!("{}:{}", table.name_for(text), text)),
    }
}

/// Appends `.csv` unless the name already ends with it, ignoring case.
pub fn normalize_csv_path(requested: &str) -> PathBuf {
    let requested = requested.trim();
    if requested.to_ascii_lowercase().ends_with(CSV_EXTENSION) {
        PathBuf::from(requested)
    } else {
        PathBuf::from(format!("{}{}", requested, CSV_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_rdns_domain::{LookupOutcome, LookupResult};

    #[test]
    fn test_normalize_appends_extension() {
        assert_eq!(normalize_csv_path("out"), PathBuf::from("out.csv"));
        assert_eq!(normalize_csv_path(" reports/run1 "), PathBuf::from("reports/run1.csv"));
    }

    #[test]
    fn test_normalize_keeps_extension_any_case() {
        assert_eq!(normalize_csv_path("out.csv"), PathBuf::from("out.csv"));
        assert_eq!(normalize_csv_path("out.CSV"), PathBuf::from("out.CSV"));
        assert_eq!(normalize_csv_path("out.Csv"), PathBuf::from("out.Csv"));
    }

    #[test]
    fn test_normalize_partial_extension() {
        assert_eq!(normalize_csv_path("out.cs"), PathBuf::from("out.cs.csv"));
        assert_eq!(normalize_csv_path("csv"), PathBuf::from("csv.csv"));
    }

    #[test]
    fn test_console_lines() {
        let table: ResultTable = vec![
            LookupResult::resolved("8.8.8.8", "dns.google"),
            LookupResult::fallback("1.2.3.4", LookupOutcome::NoRecord),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            format_console_line(&InputLine::classify("8.8.8.8"), &table).as_deref(),
            Some("dns.google:8.8.8.8")
        );
        assert_eq!(
            format_console_line(&InputLine::classify("1.2.3.4"), &table).as_deref(),
            Some("1.2.3.4:1.2.3.4")
        );
        assert_eq!(
            format_console_line(&InputLine::classify("bogus"), &table).as_deref(),
            Some("Invalid IP format:bogus")
        );
        assert_eq!(format_console_line(&InputLine::classify("# x"), &table), None);
    }
}
