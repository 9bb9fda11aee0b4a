use crate::domain::model::{ProjectFields, SkillRecord};
use crate::domain::portfolio::PortfolioRecord;
use crate::utils::error::Result;
use std::path::Path;

/// Data used when storage holds nothing usable and no seed file is given.
pub fn default_portfolio() -> PortfolioRecord {
    PortfolioRecord {
        name: "Your Name".to_string(),
        summary: "Software developer building small, dependable tools.".to_string(),
        projects: vec![
            ProjectFields::new(
                1,
                "Portfolio Page",
                "This page: a profile, projects and skills kept in local storage.",
                "https://example.com/portfolio",
            ),
            ProjectFields::new(
                2,
                "Task Tracker",
                "A command-line tracker for personal tasks.",
                "https://example.com/tasks",
            ),
        ],
        skills: ["Rust", "TypeScript", "SQL"]
            .into_iter()
            .map(|name| SkillRecord::Name(name.to_string()))
            .collect(),
    }
}

pub fn parse_seed(content: &str) -> Result<PortfolioRecord> {
    Ok(toml::from_str(content)?)
}

pub async fn load_seed(path: impl AsRef<Path>) -> Result<PortfolioRecord> {
    let path = path.as_ref();
    tracing::debug!("Reading seed file {}", path.display());
    let content = tokio::fs::read_to_string(path).await?;
    parse_seed(&content)
}
