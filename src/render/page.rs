use crate::render::banner::dismiss_script;
use crate::render::dom::{escape_html, Document, Element};
use crate::render::views::{PROJECTS_LIST_ID, SKILLS_LIST_ID, USER_NAME_ID, USER_SUMMARY_ID};

/// The page skeleton with all four render targets in place.
pub fn standard_document() -> Document {
    Document::new()
        .with_element(USER_NAME_ID, Element::new("h1").class("user-name"))
        .with_element(USER_SUMMARY_ID, Element::new("p").class("user-summary"))
        .with_element(PROJECTS_LIST_ID, Element::new("section").class("projects-grid"))
        .with_element(SKILLS_LIST_ID, Element::new("div").class("skills-cloud"))
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn section(heading: &str, content: Option<&Element>) -> String {
    format!(
        "<section><h2>{}</h2>{}</section>",
        escape_html(heading),
        content.map(Element::to_html).unwrap_or_default()
    )
}

/// Serializes the rendered targets into a full HTML page.
pub fn render_page(document: &Document) -> String {
    let title = document
        .get(USER_NAME_ID)
        .map(Element::text_content)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Portfolio".to_string());

    let header = format!(
        "<header>{}{}</header>",
        document.get(USER_NAME_ID).map(Element::to_html).unwrap_or_default(),
        document.get(USER_SUMMARY_ID).map(Element::to_html).unwrap_or_default(),
    );
    let main = format!(
        "<main>{}{}</main>",
        section("Projects", document.get(PROJECTS_LIST_ID)),
        section("Skills", document.get(SKILLS_LIST_ID)),
    );

    shell(&title, &format!("{}\n{}", header, main))
}

/// Page shown when initialization failed: only the transient banner.
pub fn render_error_page(banner: &Element) -> String {
    shell(
        "Portfolio",
        &format!("{}\n{}", banner.to_html(), dismiss_script()),
    )
}
