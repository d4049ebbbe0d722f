use async_trait::async_trait;
use ferrous_rdns_application::ports::{ReportRow, ReportWriter};
use ferrous_rdns_application::services::REPORT_HEADER;
use ferrous_rdns_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `hostname,ip` reports with a header row.
#[derive(Debug, Default)]
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_blocking(path: &Path, rows: &[ReportRow]) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(REPORT_HEADER)?;
        for row in rows {
            writer.write_record([row.hostname.as_str(), row.ip.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ReportWriter for CsvReportWriter {
    async fn write_report(&self, path: &Path, rows: &[ReportRow]) -> Result<(), DomainError> {
        let owned_path: PathBuf = path.to_path_buf();
        let owned_rows = rows.to_vec();

        debug!(path = %path.display(), rows = rows.len(), "Writing CSV report");

        let outcome =
            tokio::task::spawn_blocking(move || Self::write_blocking(&owned_path, &owned_rows))
                .await;

        let to_error = |reason: String| DomainError::OutputWrite {
            path: path.display().to_string(),
            reason,
        };

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(to_error(e.to_string())),
            Err(e) => Err(to_error(format!("writer task failed: {}", e))),
        }
    }
}
