use async_trait::async_trait;
use ferrous_rdns_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Reverse-resolves `ip`. `Ok(None)` means the resolver answered but no
    /// PTR record exists.
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;
}
