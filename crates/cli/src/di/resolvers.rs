use ferrous_rdns_application::ports::HostnameResolver;
use ferrous_rdns_domain::config::ResolverConfig;
use ferrous_rdns_domain::ResolverBackend;
use ferrous_rdns_infrastructure::dns::HickoryPtrResolver;
use ferrous_rdns_infrastructure::system::SystemHostnameResolver;
use std::sync::Arc;
use tracing::{info, warn};

pub fn build_resolver(config: &ResolverConfig) -> anyhow::Result<Arc<dyn HostnameResolver>> {
    info!(backend = config.backend.as_str(), "Initializing hostname resolver");

    let resolver: Arc<dyn HostnameResolver> = match config.backend {
        ResolverBackend::System => {
            if config.nameserver.is_some() {
                warn!("Nameserver setting is ignored by the system backend");
            }
            Arc::new(SystemHostnameResolver::new(config.concurrency))
        }
        ResolverBackend::Hickory => match config.nameserver_addr()? {
            Some(addr) => Arc::new(HickoryPtrResolver::with_nameserver(addr, config.timeout())),
            None => Arc::new(HickoryPtrResolver::from_system_conf(config.timeout())?),
        },
    };

    Ok(resolver)
}
