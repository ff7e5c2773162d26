// Home page view
use super::html::escape;
use crate::domain::page::Panel;

pub fn render_home(panels: &[Panel]) -> String {
    let mut out = String::from("<main class=\"grid grid-3\">\n");
    for panel in panels {
        out.push_str("  <section class=\"panel\">\n");
        out.push_str(&format!("    <h2>{}</h2>\n", escape(&panel.title)));
        out.push_str(&format!(
            "    <p class=\"muted\">{}</p>\n",
            escape(&panel.description)
        ));
        out.push_str("  </section>\n");
    }
    out.push_str("</main>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::SiteConfig;

    #[test]
    fn test_renders_three_panels() {
        let html = render_home(&SiteConfig::default().home_panels);

        assert_eq!(html.matches("<section").count(), 3);
        assert!(html.contains("<h2>Tenant Operations</h2>"));
        assert!(html.contains("AECA, AVIQM, and DG workflows with auditable outcomes."));
    }

    #[test]
    fn test_idempotent() {
        let panels = SiteConfig::default().home_panels;
        assert_eq!(render_home(&panels), render_home(&panels));
    }
}
