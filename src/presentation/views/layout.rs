// Layout shell wrapping every page
use super::html::escape;
use super::nav::render_nav;
use crate::domain::navigation::NavModel;
use crate::domain::page::SiteMetadata;

pub const STYLESHEET_PATH: &str = "/theme.css";

/// Compose the full document: head metadata, title heading, navigation, then
/// `content`. Output does not depend on which page supplied the content.
pub fn render_layout(metadata: &SiteMetadata, nav: &NavModel, content: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&metadata.title)));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(&metadata.description)
    ));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\n"
    ));
    out.push_str("</head>\n<body>\n<div class=\"shell\">\n");
    out.push_str(&format!("<h1 class=\"site-title\">{}</h1>\n", escape(&metadata.heading)));
    out.push_str(&render_nav(nav));
    out.push_str(content);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
