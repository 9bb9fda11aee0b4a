use crate::domain::model::{Project, ProjectInput, Skill, SkillInput};
use crate::domain::portfolio::{Portfolio, PortfolioRecord, ProfileUpdate};
use crate::domain::ports::PortfolioRepository;
use crate::utils::error::{PortfolioError, Result};

/// Use-case layer: every mutation goes to the aggregate first and is then
/// saved. A failed save is returned to the caller but the in-memory change
/// stays; `has_unsaved_changes` reports that state until a later save
/// succeeds.
pub struct PortfolioService<R: PortfolioRepository> {
    repository: R,
    portfolio: Option<Portfolio>,
    unsaved: bool,
}

impl<R: PortfolioRepository> PortfolioService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            portfolio: None,
            unsaved: false,
        }
    }

    /// Loads the stored portfolio, or builds one from `fallback` when there
    /// is nothing usable in storage.
    pub async fn initialize(&mut self, fallback: PortfolioRecord) -> Result<&Portfolio> {
        let portfolio = match self.repository.load().await {
            Ok(portfolio) => {
                tracing::info!("Loaded stored portfolio for '{}'", portfolio.name());
                portfolio
            }
            Err(e) => {
                tracing::warn!("Using fallback portfolio data: {}", e);
                Portfolio::from_record(fallback)?
            }
        };

        self.unsaved = false;
        Ok(self.portfolio.insert(portfolio))
    }

    pub fn get_portfolio(&self) -> Result<&Portfolio> {
        self.portfolio.as_ref().ok_or(PortfolioError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.portfolio.is_some()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn portfolio_mut(&mut self) -> Result<&mut Portfolio> {
        self.portfolio.as_mut().ok_or(PortfolioError::NotInitialized)
    }

    async fn persist(&mut self) -> Result<()> {
        let portfolio = self.portfolio.as_ref().ok_or(PortfolioError::NotInitialized)?;
        match self.repository.save(portfolio).await {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                Err(e)
            }
        }
    }

    pub async fn add_project(&mut self, input: impl Into<ProjectInput>) -> Result<Project> {
        let project = self.portfolio_mut()?.add_project(input)?;
        tracing::debug!("Added project {}", project.id());
        self.persist().await?;
        Ok(project)
    }

    pub async fn remove_project(&mut self, id: i64) -> Result<bool> {
        let removed = self.portfolio_mut()?.remove_project(id);
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    pub async fn add_skill(&mut self, input: impl Into<SkillInput>) -> Result<Skill> {
        let portfolio = self.portfolio_mut()?;
        let before = portfolio.skill_count();
        let skill = portfolio.add_skill(input)?;

        // an already listed skill changes nothing, so there is nothing to save
        if portfolio.skill_count() != before {
            tracing::debug!("Added skill '{}'", skill.name());
            self.persist().await?;
        }
        Ok(skill)
    }

    pub async fn remove_skill(&mut self, name: &str) -> Result<bool> {
        let removed = self.portfolio_mut()?.remove_skill(name);
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        self.portfolio_mut()?.update_profile(update)?;
        self.persist().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ProjectFields, SkillRecord};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RejectingRepository {
        saves: AtomicUsize,
    }

    #[async_trait]
    impl PortfolioRepository for RejectingRepository {
        async fn save(&self, _portfolio: &Portfolio) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Err(PortfolioError::persistence("quota exceeded"))
        }

        async fn load(&self) -> Result<Portfolio> {
            Err(PortfolioError::NotFound {
                key: "portfolio-data".to_string(),
            })
        }
    }

    fn fallback() -> PortfolioRecord {
        PortfolioRecord {
            name: "Ana".to_string(),
            summary: "Bio".to_string(),
            projects: vec![ProjectFields::new(1, "T", "D", "http://x")],
            skills: vec![SkillRecord::Name("Go".to_string())],
        }
    }

    fn rejecting() -> RejectingRepository {
        RejectingRepository {
            saves: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_get_portfolio_before_initialize() {
        let service = PortfolioService::new(rejecting());
        assert!(matches!(
            service.get_portfolio(),
            Err(PortfolioError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_mutation_before_initialize() {
        let mut service = PortfolioService::new(rejecting());
        let err = service.add_skill("Go").await.unwrap_err();
        assert!(matches!(err, PortfolioError::NotInitialized));
        assert_eq!(service.repository().saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_in_memory_change() {
        let mut service = PortfolioService::new(rejecting());
        service.initialize(fallback()).await.unwrap();

        let err = service.add_skill("Rust").await.unwrap_err();
        assert!(matches!(err, PortfolioError::Persistence { .. }));
        assert!(service.get_portfolio().unwrap().has_skill("Rust"));
        assert!(service.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_existing_skill_is_not_saved_again() {
        let mut service = PortfolioService::new(rejecting());
        service.initialize(fallback()).await.unwrap();

        let skill = service.add_skill(" Go ").await.unwrap();
        assert_eq!(skill.name(), "Go");
        assert_eq!(service.get_portfolio().unwrap().skill_count(), 1);
        assert_eq!(service.repository().saves.load(Ordering::SeqCst), 0);
        assert!(!service.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_validation_failure_does_not_save() {
        let mut service = PortfolioService::new(rejecting());
        service.initialize(fallback()).await.unwrap();

        let err = service
            .update_profile(ProfileUpdate::name("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Validation { .. }));
        assert_eq!(service.repository().saves.load(Ordering::SeqCst), 0);
        assert!(!service.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_removing_absent_project_skips_save() {
        let mut service = PortfolioService::new(rejecting());
        service.initialize(fallback()).await.unwrap();

        assert!(!service.remove_project(99).await.unwrap());
        assert_eq!(service.repository().saves.load(Ordering::SeqCst), 0);
    }
}
