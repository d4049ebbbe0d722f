use super::resolvers::build_resolver;
use ferrous_rdns_application::use_cases::{
    ExportReportUseCase, ProcessAddressListUseCase, ResolveAddressesUseCase, ResolverSettings,
};
use ferrous_rdns_domain::Config;
use ferrous_rdns_infrastructure::export::CsvReportWriter;
use ferrous_rdns_infrastructure::system::FileAddressSource;
use std::path::Path;
use std::sync::Arc;

pub struct UseCases {
    pub process: Arc<ProcessAddressListUseCase>,
    pub export: Arc<ExportReportUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, input: &Path) -> anyhow::Result<Self> {
        let resolver = build_resolver(&config.resolver)?;
        let resolve = Arc::new(ResolveAddressesUseCase::new(
            resolver,
            ResolverSettings::from(&config.resolver),
        ));

        Ok(Self {
            process: Arc::new(ProcessAddressListUseCase::new(
                Arc::new(FileAddressSource::new(input)),
                resolve,
            )),
            export: Arc::new(ExportReportUseCase::new(Arc::new(CsvReportWriter::new()))),
        })
    }
}
