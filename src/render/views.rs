use crate::domain::model::{Project, Skill};
use crate::domain::portfolio::Portfolio;
use crate::render::dom::{Document, Element, Node};
use crate::utils::error::Result;

pub const USER_NAME_ID: &str = "user-name";
pub const USER_SUMMARY_ID: &str = "user-summary";
pub const PROJECTS_LIST_ID: &str = "projects-list";
pub const SKILLS_LIST_ID: &str = "skills-list";

/// Every id the page must provide before anything is rendered.
pub const REQUIRED_TARGETS: [&str; 4] = [
    USER_NAME_ID,
    USER_SUMMARY_ID,
    PROJECTS_LIST_ID,
    SKILLS_LIST_ID,
];

/// Draws one view of the portfolio into its target elements.
pub trait Renderer: Send + Sync {
    fn targets(&self) -> &'static [&'static str];
    fn render(&self, portfolio: &Portfolio, document: &mut Document) -> Result<()>;
}

pub fn render_header(name: &str, summary: &str) -> (Node, Node) {
    (Node::text(name), Node::text(summary))
}

pub fn render_projects(projects: &[Project]) -> Vec<Element> {
    projects
        .iter()
        .map(|project| {
            Element::new("article")
                .class("project-card")
                .attr("data-project-id", project.id().to_string())
                .child(Element::new("h3").text(project.title()))
                .child(Element::new("p").text(project.description()))
                .child(
                    Element::new("a")
                        .attr("href", project.url())
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text("View project"),
                )
        })
        .collect()
}

pub fn render_skills(skills: &[Skill]) -> Vec<Element> {
    skills
        .iter()
        .map(|skill| {
            Element::new("span")
                .class("skill-tag")
                .attr("aria-label", format!("Skill: {}", skill.name()))
                .text(skill.name())
        })
        .collect()
}

fn empty_placeholder(message: &str) -> Node {
    Element::new("p").class("empty-state").text(message).into()
}

pub struct HeaderRenderer;

impl Renderer for HeaderRenderer {
    fn targets(&self) -> &'static [&'static str] {
        &[USER_NAME_ID, USER_SUMMARY_ID]
    }

    fn render(&self, portfolio: &Portfolio, document: &mut Document) -> Result<()> {
        let (name, summary) = render_header(portfolio.name(), portfolio.summary());
        document.require_mut(USER_NAME_ID)?.replace_children(vec![name]);
        document.require_mut(USER_SUMMARY_ID)?.replace_children(vec![summary]);
        Ok(())
    }
}

pub struct ProjectsRenderer;

impl Renderer for ProjectsRenderer {
    fn targets(&self) -> &'static [&'static str] {
        &[PROJECTS_LIST_ID]
    }

    fn render(&self, portfolio: &Portfolio, document: &mut Document) -> Result<()> {
        let projects = portfolio.projects();
        let children = if projects.is_empty() {
            vec![empty_placeholder("No projects yet")]
        } else {
            render_projects(&projects).into_iter().map(Node::from).collect()
        };
        document.require_mut(PROJECTS_LIST_ID)?.replace_children(children);
        Ok(())
    }
}

pub struct SkillsRenderer;

impl Renderer for SkillsRenderer {
    fn targets(&self) -> &'static [&'static str] {
        &[SKILLS_LIST_ID]
    }

    fn render(&self, portfolio: &Portfolio, document: &mut Document) -> Result<()> {
        let skills = portfolio.skills();
        let children = if skills.is_empty() {
            vec![empty_placeholder("No skills listed")]
        } else {
            render_skills(&skills).into_iter().map(Node::from).collect()
        };
        document.require_mut(SKILLS_LIST_ID)?.replace_children(children);
        Ok(())
    }
}
