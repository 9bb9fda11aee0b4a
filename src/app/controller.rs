use crate::adapters::local_storage::LocalStorageRepository;
use crate::app::service::PortfolioService;
use crate::domain::model::{Project, ProjectInput, Skill, SkillInput};
use crate::domain::portfolio::{Portfolio, PortfolioRecord, ProfileUpdate};
use crate::domain::ports::KeyValueStore;
use crate::render::dom::Document;
use crate::render::page::render_page;
use crate::render::views::{HeaderRenderer, ProjectsRenderer, Renderer, SkillsRenderer};
use crate::utils::error::{PortfolioError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum View {
    Header,
    Projects,
    Skills,
}

impl View {
    pub const ALL: [View; 3] = [View::Header, View::Projects, View::Skills];
}

/// Wires storage, service and renderers to one page. Hosts hold an `App`
/// value directly; there is no global instance.
pub struct App<S: KeyValueStore + Clone> {
    store: S,
    document: Document,
    renderers: BTreeMap<View, Box<dyn Renderer>>,
    service: Option<PortfolioService<LocalStorageRepository<S>>>,
}

impl<S: KeyValueStore + Clone> App<S> {
    pub fn new(store: S, document: Document) -> Self {
        let mut renderers: BTreeMap<View, Box<dyn Renderer>> = BTreeMap::new();
        renderers.insert(View::Header, Box::new(HeaderRenderer));
        renderers.insert(View::Projects, Box::new(ProjectsRenderer));
        renderers.insert(View::Skills, Box::new(SkillsRenderer));

        Self {
            store,
            document,
            renderers,
            service: None,
        }
    }

    pub async fn initialize(&mut self, initial: PortfolioRecord) -> Result<()> {
        tracing::info!("Initializing portfolio page");

        if let Err(e) = self.check_targets() {
            tracing::error!("❌ Page is not renderable: {}", e);
            return Err(e);
        }

        let mut service = PortfolioService::new(LocalStorageRepository::new(self.store.clone()));
        if let Err(e) = service.initialize(initial).await {
            tracing::error!("❌ Portfolio initialization failed: {}", e);
            return Err(e);
        }
        self.service = Some(service);

        self.render_views(&View::ALL)?;
        tracing::info!("✅ Portfolio page rendered");
        Ok(())
    }

    fn check_targets(&self) -> Result<()> {
        for renderer in self.renderers.values() {
            for id in renderer.targets() {
                self.document.require(id)?;
            }
        }
        Ok(())
    }

    fn render_views(&mut self, views: &[View]) -> Result<()> {
        let portfolio = self
            .service
            .as_ref()
            .ok_or(PortfolioError::NotInitialized)?
            .get_portfolio()?;

        for view in views {
            if let Some(renderer) = self.renderers.get(view) {
                tracing::debug!("Rendering {:?} view", view);
                renderer.render(portfolio, &mut self.document)?;
            }
        }
        Ok(())
    }

    fn service_mut(&mut self) -> Result<&mut PortfolioService<LocalStorageRepository<S>>> {
        self.service.as_mut().ok_or_else(|| {
            tracing::error!("❌ Operation attempted before initialization");
            PortfolioError::NotInitialized
        })
    }

    /// Re-renders `views` when `result` is a success, logs it otherwise.
    fn finish<T>(&mut self, operation: &str, result: Result<T>, views: &[View]) -> Result<T> {
        match result {
            Ok(value) => {
                self.render_views(views)?;
                Ok(value)
            }
            Err(e) => {
                tracing::error!("❌ {} failed: {} ({:?})", operation, e, e.category());
                Err(e)
            }
        }
    }

    pub async fn add_project(&mut self, input: impl Into<ProjectInput>) -> Result<Project> {
        let result = self.service_mut()?.add_project(input).await;
        self.finish("add_project", result, &[View::Projects])
    }

    pub async fn remove_project(&mut self, id: i64) -> Result<bool> {
        let result = self.service_mut()?.remove_project(id).await;
        self.finish("remove_project", result, &[View::Projects])
    }

    pub async fn add_skill(&mut self, input: impl Into<SkillInput>) -> Result<Skill> {
        let result = self.service_mut()?.add_skill(input).await;
        self.finish("add_skill", result, &[View::Skills])
    }

    pub async fn remove_skill(&mut self, name: &str) -> Result<bool> {
        let result = self.service_mut()?.remove_skill(name).await;
        self.finish("remove_skill", result, &[View::Skills])
    }

    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        let result = self.service_mut()?.update_profile(update).await;
        self.finish("update_profile", result, &[View::Header])
    }

    pub fn get_portfolio(&self) -> Result<&Portfolio> {
        self.service
            .as_ref()
            .ok_or(PortfolioError::NotInitialized)?
            .get_portfolio()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.service
            .as_ref()
            .is_some_and(|service| service.has_unsaved_changes())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn render_page(&self) -> String {
        render_page(&self.document)
    }
}
