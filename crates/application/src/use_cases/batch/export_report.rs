use crate::ports::ReportWriter;
use crate::services::normalize_csv_path;
use crate::use_cases::batch::ProcessedBatch;
use ferrous_rdns_domain::DomainError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct ExportReportUseCase {
    writer: Arc<dyn ReportWriter>,
}

impl ExportReportUseCase {
    pub fn new(writer: Arc<dyn ReportWriter>) -> Self {
        Self { writer }
    }

    /// Writes the CSV report and returns the path actually used.
    pub async fn execute(
        &self,
        batch: &ProcessedBatch,
        requested_path: &str,
    ) -> Result<PathBuf, DomainError> {
        let path = normalize_csv_path(requested_path);
        let rows = batch.report_rows();

        self.writer.write_report(&path, &rows).await?;

        info!(path = %path.display(), rows = rows.len(), "CSV report saved");
        Ok(path)
    }
}
