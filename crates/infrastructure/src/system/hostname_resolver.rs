use async_trait::async_trait;
use ferrous_rdns_application::ports::HostnameResolver;
use ferrous_rdns_application::services::BlockingLookupPool;
use ferrous_rdns_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Reverse lookups through the host resolver (`getnameinfo`), so `/etc/hosts`
/// and NSS modules are honoured. Calls run on the blocking pool, at most
/// `concurrency` at once even when the caller has given up waiting.
#[derive(Debug)]
pub struct SystemHostnameResolver {
    pool: BlockingLookupPool,
}

impl SystemHostnameResolver {
    pub fn new(concurrency: usize) -> Self {
        Self {
            pool: BlockingLookupPool::new(concurrency),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.pool.limit()
    }

    fn lookup_blocking(ip: IpAddr) -> Result<Option<String>, DomainError> {
        match dns_lookup::lookup_addr(&ip) {
            // getnameinfo echoes the numeric form when there is no PTR record
            Ok(name) if name.parse::<IpAddr>().is_ok_and(|parsed| parsed == ip) => Ok(None),
            Ok(name) => Ok(Some(name)),
            Err(e) => Err(DomainError::LookupFailed {
                address: ip.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl HostnameResolver for SystemHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(ip = %ip, "Performing system reverse lookup");

        self.pool
            .run(ip.to_string(), move || Self::lookup_blocking(ip))
            .await
    }
}
