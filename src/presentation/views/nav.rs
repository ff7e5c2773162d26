// Navigation bar view
use super::html::escape;
use crate::domain::navigation::NavModel;

pub fn render_nav(model: &NavModel) -> String {
    let mut out = String::from("<nav class=\"nav panel\">\n");
    for link in model.links() {
        out.push_str(&format!(
            "  <a class=\"nav-link\" href=\"{}\">{}</a>\n",
            escape(&link.path),
            escape(&link.label)
        ));
    }
    out.push_str("</nav>\n");
    out
}
