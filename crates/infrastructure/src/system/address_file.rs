use async_trait::async_trait;
use ferrous_rdns_application::ports::AddressSource;
use ferrous_rdns_domain::DomainError;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Reads candidate addresses from a UTF-8 text file, one per line.
pub struct FileAddressSource {
    path: PathBuf,
}

impl FileAddressSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AddressSource for FileAddressSource {
    async fn read_lines(&self) -> Result<Vec<String>, DomainError> {
        let content =
            fs::read_to_string(&self.path)
                .await
                .map_err(|e| DomainError::InputUnreadable {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })?;

        let lines: Vec<String> = content
            .trim_start_matches(UTF8_BOM)
            .lines()
            .map(str::to_string)
            .collect();

        debug!(path = %self.path.display(), lines = lines.len(), "Input file read");
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
