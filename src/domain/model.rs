//! Value objects owned by the portfolio aggregate.
//!
//! Both types validate on construction and expose no mutators. Serde goes
//! through the raw field types (`ProjectFields`, `SkillRecord`) so that a
//! deserialized value has passed the same checks as a constructed one.

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_id, validate_required_field, validate_url,
};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Raw, unvalidated project fields as they arrive from a form, a seed file
/// or storage. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFields {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl ProjectFields {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            title: Some(title.into()),
            description: Some(description.into()),
            url: Some(url.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProjectFields")]
pub struct Project {
    id: i64,
    title: String,
    description: String,
    url: String,
}

impl Project {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        Self::try_from(ProjectFields::new(id, title, description, url))
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn to_fields(&self) -> ProjectFields {
        ProjectFields::new(
            self.id,
            self.title.clone(),
            self.description.clone(),
            self.url.clone(),
        )
    }
}

impl TryFrom<ProjectFields> for Project {
    type Error = PortfolioError;

    fn try_from(fields: ProjectFields) -> Result<Self> {
        let id = *validate_required_field("id", &fields.id)?;
        validate_positive_id("id", id)?;

        let title = validate_required_field("title", &fields.title)?;
        validate_non_empty_string("title", title)?;

        let description = validate_required_field("description", &fields.description)?;
        validate_non_empty_string("description", description)?;

        let url = validate_required_field("url", &fields.url)?;
        validate_url("url", url)?;

        Ok(Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            url: url.trim().to_string(),
        })
    }
}

// identity is the id alone
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

/// Stored shape of a skill: older data keeps bare names, newer data keeps
/// `{ "name": ... }` objects. Both are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillRecord {
    Name(String),
    Named { name: String },
}

impl SkillRecord {
    pub fn name(&self) -> &str {
        match self {
            SkillRecord::Name(name) | SkillRecord::Named { name } => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SkillRecord")]
pub struct Skill {
    name: String,
}

impl Skill {
    pub fn new(name: &str) -> Result<Self> {
        validate_non_empty_string("name", name)?;
        Ok(Self {
            name: Self::normalize(name).to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key used for equality and lookups.
    pub fn normalize(name: &str) -> &str {
        name.trim()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name == Self::normalize(name)
    }
}

impl TryFrom<SkillRecord> for Skill {
    type Error = PortfolioError;

    fn try_from(record: SkillRecord) -> Result<Self> {
        Skill::new(record.name())
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Input accepted by `Portfolio::add_project`, resolved once at the boundary.
#[derive(Debug, Clone)]
pub enum ProjectInput {
    Raw(ProjectFields),
    Existing(Project),
}

impl ProjectInput {
    pub fn into_project(self) -> Result<Project> {
        match self {
            ProjectInput::Raw(fields) => Project::try_from(fields),
            ProjectInput::Existing(project) => Ok(project),
        }
    }
}

impl From<ProjectFields> for ProjectInput {
    fn from(fields: ProjectFields) -> Self {
        ProjectInput::Raw(fields)
    }
}

impl From<Project> for ProjectInput {
    fn from(project: Project) -> Self {
        ProjectInput::Existing(project)
    }
}

/// Input accepted by `Portfolio::add_skill`.
#[derive(Debug, Clone)]
pub enum SkillInput {
    Name(String),
    Existing(Skill),
}

impl SkillInput {
    pub fn into_skill(self) -> Result<Skill> {
        match self {
            SkillInput::Name(name) => Skill::new(&name),
            SkillInput::Existing(skill) => Ok(skill),
        }
    }
}

impl From<&str> for SkillInput {
    fn from(name: &str) -> Self {
        SkillInput::Name(name.to_string())
    }
}

impl From<String> for SkillInput {
    fn from(name: String) -> Self {
        SkillInput::Name(name)
    }
}

impl From<Skill> for SkillInput {
    fn from(skill: Skill) -> Self {
        SkillInput::Existing(skill)
    }
}

impl From<SkillRecord> for SkillInput {
    fn from(record: SkillRecord) -> Self {
        match record {
            SkillRecord::Name(name) | SkillRecord::Named { name } => SkillInput::Name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_requires_every_field() {
        let mut fields = ProjectFields::new(1, "T", "D", "http://x");
        fields.title = None;
        let err = Project::try_from(fields).unwrap_err();
        assert!(matches!(err, PortfolioError::Validation { ref field, .. } if field == "title"));

        let fields = ProjectFields {
            id: None,
            ..ProjectFields::new(1, "T", "D", "http://x")
        };
        assert!(Project::try_from(fields).is_err());
    }

    #[test]
    fn test_project_rejects_blank_and_non_positive() {
        assert!(Project::new(0, "T", "D", "http://x").is_err());
        assert!(Project::new(-1, "T", "D", "http://x").is_err());
        assert!(Project::new(1, "  ", "D", "http://x").is_err());
        assert!(Project::new(1, "T", "", "http://x").is_err());
        assert!(Project::new(1, "T", "D", "javascript:alert(1)").is_err());
    }

    #[test]
    fn test_project_round_trips_through_json() {
        let project = Project::new(7, "Compiler", "A toy compiler", "https://example.com").unwrap();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
        assert_eq!(back.title(), "Compiler");
        assert_eq!(back.url(), "https://example.com");
    }

    #[test]
    fn test_project_deserialize_rejects_bad_id() {
        let result: std::result::Result<Project, _> =
            serde_json::from_str(r#"{"id":0,"title":"T","description":"D","url":"http://x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_url_must_be_absolute_http() {
        assert!(Project::new(1, "T", "D", "https://example.com/demo").is_ok());
        for url in ["/demo", "demo.html", "example.com", "//example.com", "ftp://example.com"] {
            let err = Project::new(1, "T", "D", url).unwrap_err();
            assert!(
                matches!(err, PortfolioError::Validation { ref field, .. } if field == "url"),
                "{} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_project_deserialize_rejects_wrong_types() {
        let cases = [
            r#"{"id":"1","title":"T","description":"D","url":"http://x"}"#,
            r#"{"id":1,"title":5,"description":"D","url":"http://x"}"#,
            r#"{"id":1.5,"title":"T","description":"D","url":"http://x"}"#,
            r#"{"id":1,"title":"T","description":["D"],"url":"http://x"}"#,
        ];
        for json in cases {
            let err = serde_json::from_str::<Project>(json).unwrap_err();
            assert!(err.to_string().contains("invalid type"), "{}: {}", json, err);
        }

        let err = serde_json::from_str::<Skill>("42").unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_project_equality_is_by_id() {
        let a = Project::new(1, "A", "D", "http://a").unwrap();
        let b = Project::new(1, "B", "E", "http://b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_skill_is_trimmed_and_compared_by_name() {
        let skill = Skill::new("  Rust ").unwrap();
        assert_eq!(skill.name(), "Rust");
        assert_eq!(skill, Skill::new("Rust").unwrap());
        assert!(skill.matches(" Rust"));
        assert!(Skill::new("   ").is_err());
    }

    #[test]
    fn test_skill_accepts_both_stored_shapes() {
        let bare: Skill = serde_json::from_str(r#""Go""#).unwrap();
        let named: Skill = serde_json::from_str(r#"{"name":"Go"}"#).unwrap();
        assert_eq!(bare, named);
        assert_eq!(serde_json::to_string(&named).unwrap(), r#"{"name":"Go"}"#);
    }
}
