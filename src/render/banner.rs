use crate::render::dom::Element;
use std::time::Duration;

pub const BANNER_ID: &str = "error-banner";

/// How long the error banner stays on the page.
pub const BANNER_DISMISS_AFTER: Duration = Duration::from_secs(5);

pub fn error_banner(message: &str) -> Element {
    Element::new("div")
        .attr("id", BANNER_ID)
        .class("error-banner")
        .attr("role", "alert")
        .attr(
            "data-dismiss-ms",
            BANNER_DISMISS_AFTER.as_millis().to_string(),
        )
        .text(message)
}

/// Inline script removing the banner once the dismiss delay has passed.
/// Written out directly because element text is always escaped.
pub fn dismiss_script() -> String {
    format!(
        "<script>setTimeout(function(){{var b=document.getElementById('{}');if(b)b.remove();}},{});</script>",
        BANNER_ID,
        BANNER_DISMISS_AFTER.as_millis()
    )
}
