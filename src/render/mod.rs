pub mod banner;
pub mod dom;
pub mod page;
pub mod views;

pub use dom::{escape_html, Document, Element, Node};
pub use views::{HeaderRenderer, ProjectsRenderer, Renderer, SkillsRenderer};
