pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FileStore, LocalStorageRepository, MemoryStore, STORAGE_KEY};
pub use app::{App, PortfolioService, View};
pub use domain::model::{Project, ProjectFields, ProjectInput, Skill, SkillInput, SkillRecord};
pub use domain::portfolio::{Portfolio, PortfolioRecord, ProfileUpdate};
pub use domain::ports::{KeyValueStore, PortfolioRepository};
pub use utils::error::{ErrorCategory, PortfolioError, Result};
