use async_trait::async_trait;
use ferrous_rdns_application::ports::HostnameResolver;
use ferrous_rdns_domain::DomainError;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, info};

/// PTR lookups through hickory's async stub resolver.
pub struct HickoryPtrResolver {
    resolver: TokioResolver,
}

impl HickoryPtrResolver {
    /// Uses the nameservers from the system configuration (`/etc/resolv.conf`).
    pub fn from_system_conf(timeout: Duration) -> Result<Self, DomainError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?
            .with_options(Self::options(timeout))
            .build();

        info!("Hickory resolver using system configuration");
        Ok(Self { resolver })
    }

    /// Queries a single nameserver over UDP (TCP on truncation).
    pub fn with_nameserver(nameserver: SocketAddr, timeout: Duration) -> Self {
        let servers =
            NameServerConfigGroup::from_ips_clear(&[nameserver.ip()], nameserver.port(), true);
        let config = ResolverConfig::from_parts(None, vec![], servers);

        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(Self::options(timeout))
                .build();

        info!(nameserver = %nameserver, "Hickory resolver using explicit nameserver");
        Self { resolver }
    }

    fn options(timeout: Duration) -> ResolverOpts {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        // no retries: one attempt per lookup
        opts.attempts = 1;
        opts.ndots = 0;
        opts
    }
}

#[async_trait]
impl HostnameResolver for HickoryPtrResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(ip = %ip, "Performing PTR lookup");

        match self.resolver.reverse_lookup(ip).await {
            Ok(lookup) => {
                let hostname = lookup.iter().next().map(|ptr| ptr.to_string());
                if hostname.is_none() {
                    debug!(ip = %ip, "PTR lookup returned no records");
                }
                Ok(hostname)
            }
            Err(e) if e.is_no_records_found() || e.is_nx_domain() => {
                debug!(ip = %ip, "No PTR record");
                Ok(None)
            }
            Err(e) => Err(DomainError::LookupFailed {
                address: ip.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
