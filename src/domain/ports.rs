use crate::domain::portfolio::Portfolio;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Local client storage: string values under string keys.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str)
        -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_item(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Persistence contract for the portfolio aggregate. The service only
/// sees this trait, so a file, browser or remote store can stand behind it.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn save(&self, portfolio: &Portfolio) -> Result<()>;
    async fn load(&self) -> Result<Portfolio>;
}
