use async_trait::async_trait;
use ferrous_rdns_domain::DomainError;

#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Returns every raw line of the input, unfiltered.
    async fn read_lines(&self) -> Result<Vec<String>, DomainError>;

    fn describe(&self) -> String;
}
