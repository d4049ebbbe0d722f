use async_trait::async_trait;
use ferrous_rdns_domain::DomainError;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub hostname: String,
    pub ip: String,
}

#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write_report(&self, path: &Path, rows: &[ReportRow]) -> Result<(), DomainError>;
}
