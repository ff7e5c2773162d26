// Stylesheet generated from theme tokens
use crate::domain::theme::ThemeTokens;

const BACKGROUND_TOKEN: &str = "slatebase";
const FALLBACK_BACKGROUND: &str = "#10192A";

const BASE_RULES: &str = "\
.shell { max-width: 72rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1.5rem; }
.site-title { font-size: 1.875rem; font-weight: 600; margin: 0; }
.panel { border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 0.75rem; \
background: rgba(255, 255, 255, 0.04); padding: 1rem; }
.nav { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.nav-link { padding: 0.25rem 0.75rem; border-radius: 0.25rem; font-size: 0.875rem; \
color: inherit; text-decoration: none; background: rgba(255, 255, 255, 0.1); }
.nav-link:hover { background: rgba(255, 255, 255, 0.2); }
.grid { display: grid; gap: 1rem; }
.stack { display: flex; flex-direction: column; gap: 1.5rem; }
.muted { font-size: 0.875rem; color: #e2e8f0; }
.metric-label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.025em; color: #cbd5e1; }
.metric-value { margin-top: 0.5rem; font-size: 1.5rem; font-weight: 600; }
.metric-hint { margin-top: 0.25rem; font-size: 0.75rem; color: #cbd5e1; }
@media (min-width: 768px) { .grid-3 { grid-template-columns: repeat(3, 1fr); } \
.grid-4 { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1280px) { .grid-4 { grid-template-columns: repeat(4, 1fr); } }
";

pub fn render_stylesheet(theme: &ThemeTokens) -> String {
    let mut out = String::from(":root {\n");
    for token in theme.colors() {
        out.push_str(&format!("  --color-{}: {};\n", token.name, token.value));
    }
    out.push_str("}\n");

    for token in theme.colors() {
        let name = &token.name;
        out.push_str(&format!(".bg-{name} {{ background-color: var(--color-{name}); }}\n"));
        out.push_str(&format!(".text-{name} {{ color: var(--color-{name}); }}\n"));
        out.push_str(&format!(".border-{name} {{ border-color: var(--color-{name}); }}\n"));
    }

    let background = theme.color(BACKGROUND_TOKEN).unwrap_or(FALLBACK_BACKGROUND);
    out.push_str(&format!(
        "body {{ margin: 0; padding: 1.5rem; font-family: system-ui, sans-serif; \
         background: {background}; color: #f1f5f9; }}\n"
    ));
    out.push_str(BASE_RULES);
    out
}
