// Station analytics page view
use super::html::escape;
use crate::domain::metric::{MetricCard, StationIntro};

pub fn render_station_analytics(intro: &StationIntro, cards: &[MetricCard]) -> String {
    let mut out = String::from("<main class=\"stack\">\n");
    out.push_str("  <section class=\"panel\">\n");
    out.push_str(&format!("    <h1>{}</h1>\n", escape(&intro.heading)));
    out.push_str(&format!("    <p class=\"muted\">{}</p>\n", escape(&intro.text)));
    out.push_str("  </section>\n");

    out.push_str("  <section class=\"grid grid-4\">\n");
    for card in cards {
        out.push_str(&render_card(card));
    }
    out.push_str("  </section>\n</main>\n");
    out
}

fn render_card(card: &MetricCard) -> String {
    format!(
        "    <article class=\"panel metric-card\">\n      \
         <p class=\"metric-label\">{}</p>\n      \
         <p class=\"metric-value\">{}</p>\n      \
         <p class=\"metric-hint\">{}</p>\n    \
         </article>\n",
        escape(&card.label),
        escape(&card.value),
        escape(&card.hint)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::SiteConfig;

    fn between<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
        html.split(open)
            .skip(1)
            .filter_map(|rest| rest.split("</p>").next())
            .collect()
    }

    #[test]
    fn test_renders_four_cards_in_order() {
        let station = SiteConfig::default().station;
        let html = render_station_analytics(&station.intro, &station.cards);

        assert_eq!(html.matches("<article").count(), 4);
        assert_eq!(
            between(&html, "<p class=\"metric-value\">"),
            vec!["26.4", "82", "9.2%", "31"]
        );
        assert_eq!(
            between(&html, "<p class=\"metric-hint\">"),
            vec![
                "vs target 25.0",
                "loading zone bottleneck",
                "amber threshold",
                "rolling 24h"
            ]
        );
    }

    #[test]
    fn test_throughput_card() {
        let station = SiteConfig::default().station;
        let html = render_station_analytics(&station.intro, &station.cards);

        let labels = between(&html, "<p class=\"metric-label\">");
        let values = between(&html, "<p class=\"metric-value\">");
        let hints = between(&html, "<p class=\"metric-hint\">");
        let idx = labels.iter().position(|l| *l == "Throughput / hr").unwrap();

        assert_eq!(values[idx], "26.4");
        assert!(hints[idx].contains("target 25.0"));
    }

    #[test]
    fn test_empty_cards_render_nothing() {
        let intro = SiteConfig::default().station.intro;
        let html = render_station_analytics(&intro, &[]);

        assert_eq!(html.matches("<article").count(), 0);
        assert!(html.contains("<h1>Station Analytics</h1>"));
    }
}
