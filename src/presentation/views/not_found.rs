// Page for routes with no registered view
use super::html::escape;

pub fn render_not_found(path: &str) -> String {
    format!(
        "<main class=\"stack\">\n  <section class=\"panel\">\n    \
         <h1>Page not found</h1>\n    \
         <p class=\"muted\">No page is available at <code>{}</code>.</p>\n  \
         </section>\n</main>\n",
        escape(path)
    )
}
