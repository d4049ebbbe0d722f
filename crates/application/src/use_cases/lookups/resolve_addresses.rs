use crate::ports::HostnameResolver;
use ferrous_rdns_domain::config::resolver::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_MS};
use ferrous_rdns_domain::config::ResolverConfig;
use ferrous_rdns_domain::{LookupOutcome, LookupResult, ResultTable};
use futures::FutureExt;
use std::collections::HashSet;
use std::net::IpAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    pub concurrency: usize,
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl From<&ResolverConfig> for ResolverSettings {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            concurrency: config.concurrency,
            timeout: config.timeout(),
        }
    }
}

/// Bounded fan-out of reverse lookups.
///
/// At most `concurrency` lookups run at once and each one is cut off after
/// `timeout`. Every submitted address yields exactly one [`LookupResult`];
/// failures of any kind fall back to the address itself.
pub struct ResolveAddressesUseCase {
    resolver: Arc<dyn HostnameResolver>,
    settings: ResolverSettings,
}

impl ResolveAddressesUseCase {
    pub fn new(resolver: Arc<dyn HostnameResolver>, settings: ResolverSettings) -> Self {
        Self { resolver, settings }
    }

    pub fn settings(&self) -> ResolverSettings {
        self.settings
    }

    /// Resolves every address and returns once all lookups have reported.
    pub async fn resolve_all<I>(&self, addresses: I) -> ResultTable
    where
        I: IntoIterator<Item = (String, IpAddr)>,
    {
        let mut rx = self.stream(addresses);
        let mut table = ResultTable::new();
        let mut fallbacks = 0usize;

        while let Some(result) = rx.recv().await {
            if !result.outcome.is_resolved() {
                fallbacks += 1;
            }
            table.insert(result);
        }

        info!(
            total = table.len(),
            resolved = table.len() - fallbacks,
            fallbacks,
            "Reverse lookups complete"
        );
        table
    }

    /// Starts resolving and yields results in completion order. The channel
    /// closes after the last submitted address has reported.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn stream<I>(&self, addresses: I) -> mpsc::Receiver<LookupResult>
    where
        I: IntoIterator<Item = (String, IpAddr)>,
    {
        let targets = dedupe(addresses);
        let concurrency = self.settings.concurrency.max(1);
        let timeout = self.settings.timeout;
        let resolver = Arc::clone(&self.resolver);
        let (tx, rx) = mpsc::channel(concurrency);

        info!(
            addresses = targets.len(),
            workers = concurrency,
            timeout_ms = timeout.as_millis() as u64,
            "Starting reverse lookups"
        );

        tokio::spawn(async move {
            let semaphore = Arc::new(Semaphore::new(concurrency));
            let mut join_set = JoinSet::new();

            for (address, ip) in targets {
                let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                    break;
                };
                let resolver = Arc::clone(&resolver);
                let tx = tx.clone();

                join_set.spawn(async move {
                    let result = lookup_one(resolver.as_ref(), address, ip, timeout).await;
                    drop(permit);
                    if tx.send(result).await.is_err() {
                        debug!("Result receiver dropped");
                    }
                });
            }
            drop(tx);

            while let Some(joined) = join_set.join_next().await {
                if let Err(e) = joined {
                    warn!(error = %e, "Lookup task failed");
                }
            }
        });

        rx
    }
}

async fn lookup_one(
    resolver: &dyn HostnameResolver,
    address: String,
    ip: IpAddr,
    timeout: Duration,
) -> LookupResult {
    let lookup = AssertUnwindSafe(resolver.resolve_hostname(ip)).catch_unwind();

    let result = match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(Ok(Some(hostname)))) => match normalize_hostname(&hostname) {
            Some(name) => LookupResult::resolved(address, name),
            None => LookupResult::fallback(address, LookupOutcome::NoRecord),
        },
        Ok(Ok(Ok(None))) => LookupResult::fallback(address, LookupOutcome::NoRecord),
        Ok(Ok(Err(e))) => LookupResult::fallback(address, LookupOutcome::Failed(e.to_string())),
        Ok(Err(_)) => LookupResult::fallback(
            address,
            LookupOutcome::Failed("resolver panicked".to_string()),
        ),
        Err(_) => LookupResult::fallback(address, LookupOutcome::TimedOut),
    };

    debug!(
        ip = %ip,
        name = %result.resolved_name,
        outcome = %result.outcome,
        "Reverse lookup finished"
    );
    result
}

/// Strips the root label dot; blank names count as no record.
fn normalize_hostname(hostname: &str) -> Option<String> {
    let name = hostname.trim().trim_end_matches('.');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Keeps the first occurrence of each address text.
fn dedupe<I>(addresses: I) -> Vec<(String, IpAddr)>
where
    I: IntoIterator<Item = (String, IpAddr)>,
{
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .filter(|(address, _)| seen.insert(address.clone()))
        .collect()
}
