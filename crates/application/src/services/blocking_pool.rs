use ferrous_rdns_domain::DomainError;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs blocking lookups on tokio's blocking pool, at most `limit` at a time.
///
/// The slot is released when the blocking call returns, not when the awaiting
/// future is dropped, so abandoned calls still count against the limit.
#[derive(Debug, Clone)]
pub struct BlockingLookupPool {
    slots: Arc<Semaphore>,
    limit: usize,
}

impl BlockingLookupPool {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            slots: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    pub async fn run<F, T>(&self, address: String, lookup: F) -> Result<T, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|e| DomainError::LookupFailed {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            lookup()
        })
        .await
        .map_err(|e| DomainError::LookupFailed {
            address,
            reason: format!("lookup task failed: {}", e),
        })?
    }
}
