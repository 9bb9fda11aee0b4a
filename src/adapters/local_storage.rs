use crate::domain::portfolio::{Portfolio, PortfolioRecord};
use crate::domain::ports::{KeyValueStore, PortfolioRepository};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;

/// Fixed key the serialized portfolio lives under.
pub const STORAGE_KEY: &str = "portfolio-data";

/// Repository that keeps the portfolio as one JSON string in a
/// key-value store.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LocalStorageRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl<S: KeyValueStore> PortfolioRepository for LocalStorageRepository<S> {
    async fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let payload = serde_json::to_string(&portfolio.to_record())?;

        tracing::debug!("Saving portfolio ({} bytes) under '{}'", payload.len(), self.key);
        self.store
            .set_item(&self.key, &payload)
            .await
            .map_err(|e| PortfolioError::persistence(format!("write rejected: {}", e)))
    }

    async fn load(&self) -> Result<Portfolio> {
        let payload = self
            .store
            .get_item(&self.key)
            .await
            .map_err(|e| PortfolioError::persistence(format!("read failed: {}", e)))?
            .ok_or_else(|| PortfolioError::NotFound {
                key: self.key.clone(),
            })?;

        tracing::debug!("Loaded {} bytes from '{}'", payload.len(), self.key);

        let record: PortfolioRecord = serde_json::from_str(&payload)
            .map_err(|e| PortfolioError::persistence(format!("malformed portfolio data: {}", e)))?;

        Portfolio::from_record(record)
            .map_err(|e| PortfolioError::persistence(format!("invalid stored portfolio: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stores::MemoryStore;
    use crate::domain::model::ProjectFields;

    fn sample() -> Portfolio {
        Portfolio::new(
            "Ana",
            "Bio",
            vec![ProjectFields::new(1, "T", "D", "http://x")],
            vec!["Go"],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let repo = LocalStorageRepository::new(MemoryStore::new());
        repo.save(&sample()).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.name(), "Ana");
        assert_eq!(loaded.projects().len(), 1);
        assert!(loaded.has_skill("Go"));
    }

    #[tokio::test]
    async fn test_saved_payload_shape() {
        let store = MemoryStore::new();
        let repo = LocalStorageRepository::new(store.clone());
        repo.save(&sample()).await.unwrap();

        let raw = store.get_item(STORAGE_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ana",
                "summary": "Bio",
                "projects": [{"id": 1, "title": "T", "description": "D", "url": "http://x"}],
                "skills": [{"name": "Go"}]
            })
        );
    }

    #[tokio::test]
    async fn test_load_missing_key_is_not_found() {
        let repo = LocalStorageRepository::new(MemoryStore::new());
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, PortfolioError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_malformed_is_persistence_error() {
        let store = MemoryStore::new();
        store.set_item(STORAGE_KEY, "{not json").await.unwrap();
        let repo = LocalStorageRepository::new(store);

        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, PortfolioError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_load_accepts_bare_skill_names() {
        let store = MemoryStore::new();
        store
            .set_item(
                STORAGE_KEY,
                r#"{"name":"Ana","summary":"","projects":[],"skills":["Go",{"name":"Rust"}]}"#,
            )
            .await
            .unwrap();
        let repo = LocalStorageRepository::new(store);

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.skill_count(), 2);
        assert!(loaded.has_skill("Rust"));
    }

    #[tokio::test]
    async fn test_save_rejected_by_quota() {
        let repo = LocalStorageRepository::new(MemoryStore::with_quota(16));
        let err = repo.save(&sample()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Persistence { .. }));
    }
}
