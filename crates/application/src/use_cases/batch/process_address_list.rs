use crate::ports::{AddressSource, ReportRow};
use crate::services::format_console_line;
use crate::use_cases::lookups::ResolveAddressesUseCase;
use ferrous_rdns_domain::{DomainError, InputLine, ResultTable};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Classified input together with the resolution results.
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    pub lines: Vec<InputLine>,
    pub table: ResultTable,
}

impl ProcessedBatch {
    /// One line per non-skipped input line, in input order.
    pub fn console_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| format_console_line(line, &self.table))
            .collect()
    }

    /// One row per distinct valid address, in first-seen order.
    pub fn report_rows(&self) -> Vec<ReportRow> {
        let mut seen = HashSet::new();
        self.addresses()
            .filter(|address| seen.insert(*address))
            .map(|address| ReportRow {
                hostname: self.table.name_for(address).to_string(),
                ip: address.to_string(),
            })
            .collect()
    }

    pub fn valid_count(&self) -> usize {
        self.addresses().count()
    }

    pub fn invalid_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, InputLine::Invalid(_)))
            .count()
    }

    fn addresses(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            InputLine::Address { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub struct ProcessAddressListUseCase {
    source: Arc<dyn AddressSource>,
    resolve: Arc<ResolveAddressesUseCase>,
}

impl ProcessAddressListUseCase {
    pub fn new(source: Arc<dyn AddressSource>, resolve: Arc<ResolveAddressesUseCase>) -> Self {
        Self { source, resolve }
    }

    /// Reads and classifies the input, then resolves every valid address.
    /// Only an unreadable input is an error.
    pub async fn execute(&self) -> Result<ProcessedBatch, DomainError> {
        let raw_lines = self.source.read_lines().await?;
        let lines: Vec<InputLine> = raw_lines.iter().map(|l| InputLine::classify(l)).collect();

        let addresses: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                InputLine::Address { text, ip } => Some((text.clone(), *ip)),
                _ => None,
            })
            .collect();

        info!(
            source = %self.source.describe(),
            valid = addresses.len(),
            "Loaded input addresses"
        );

        let table = if addresses.is_empty() {
            ResultTable::new()
        } else {
            self.resolve.resolve_all(addresses).await
        };

        Ok(ProcessedBatch { lines, table })
    }
}
