//! The `Portfolio` aggregate root.
//!
//! All changes to the owned projects and skills go through the methods
//! below. Projects are unique by id, skills by normalized name, and both
//! keep insertion order.

use crate::domain::model::{Project, ProjectFields, ProjectInput, Skill, SkillInput, SkillRecord};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// Persisted (and seed) shape of a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub projects: Vec<ProjectFields>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

/// Partial profile change. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub summary: Option<String>,
}

impl ProfileUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            summary: None,
        }
    }

    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            name: None,
            summary: Some(summary.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    name: String,
    summary: String,
    projects: Vec<Project>,
    skills: Vec<Skill>,
}

impl Portfolio {
    pub fn new<P, S>(name: &str, summary: &str, projects: P, skills: S) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<ProjectInput>,
        S: IntoIterator,
        S::Item: Into<SkillInput>,
    {
        validate_non_empty_string("name", name)?;

        let mut portfolio = Self {
            name: name.trim().to_string(),
            summary: summary.trim().to_string(),
            projects: Vec::new(),
            skills: Vec::new(),
        };

        for project in projects {
            portfolio.add_project(project)?;
        }
        for skill in skills {
            portfolio.add_skill(skill)?;
        }

        Ok(portfolio)
    }

    pub fn from_record(record: PortfolioRecord) -> Result<Self> {
        Self::new(
            &record.name,
            &record.summary,
            record.projects,
            record.skills,
        )
    }

    pub fn to_record(&self) -> PortfolioRecord {
        PortfolioRecord {
            name: self.name.clone(),
            summary: self.summary.clone(),
            projects: self.projects.iter().map(Project::to_fields).collect(),
            skills: self
                .skills
                .iter()
                .map(|skill| SkillRecord::Named {
                    name: skill.name().to_string(),
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn add_project(&mut self, input: impl Into<ProjectInput>) -> Result<Project> {
        let input: ProjectInput = input.into();
        let project = input.into_project()?;

        if self.project(project.id()).is_some() {
            return Err(PortfolioError::DuplicateId { id: project.id() });
        }

        self.projects.push(project.clone());
        Ok(project)
    }

    /// Returns whether a project was removed.
    pub fn remove_project(&mut self, id: i64) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id() != id);
        self.projects.len() != before
    }

    /// Adding a skill that is already present returns the stored one.
    pub fn add_skill(&mut self, input: impl Into<SkillInput>) -> Result<Skill> {
        let input: SkillInput = input.into();
        let skill = input.into_skill()?;

        if let Some(existing) = self.skills.iter().find(|s| **s == skill) {
            return Ok(existing.clone());
        }

        self.skills.push(skill.clone());
        Ok(skill)
    }

    pub fn remove_skill(&mut self, name: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| !s.matches(name));
        self.skills.len() != before
    }

    /// Validates the whole resulting profile before touching any field.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        let name = update.name.as_deref().unwrap_or(&self.name);
        let summary = update.summary.as_deref().unwrap_or(&self.summary);

        validate_non_empty_string("name", name)?;

        let name = name.trim().to_string();
        let summary = summary.trim().to_string();
        self.name = name;
        self.summary = summary;
        Ok(())
    }

    pub fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.matches(name))
    }

    /// Snapshot in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Snapshot in insertion order.
    pub fn skills(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
