use crate::domain::error::SiteError;
use crate::domain::metric::{MetricCard, StationIntro};
use crate::domain::navigation::{NavLink, NavModel};
use crate::domain::page::{Panel, SiteMetadata};
use crate::domain::theme::ThemeTokens;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/site";
const ENV_PREFIX: &str = "NEXUS_WEB";

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub site: SiteMetadata,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavLink>,
    #[serde(default = "default_home_panels")]
    pub home_panels: Vec<Panel>,
    #[serde(default)]
    pub station: StationSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_addr")]
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StationSettings {
    #[serde(default)]
    pub intro: StationIntro,
    #[serde(default = "default_station_cards")]
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorConfig>,
    #[serde(default = "default_content")]
    pub content: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ColorConfig {
    pub name: String,
    pub value: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            site: SiteMetadata::default(),
            navigation: default_navigation(),
            home_panels: default_home_panels(),
            station: StationSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

impl Default for StationSettings {
    fn default() -> Self {
        Self {
            intro: StationIntro::default(),
            cards: default_station_cards(),
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            content: default_content(),
        }
    }
}

impl SiteConfig {
    pub fn nav_model(&self) -> Result<NavModel, SiteError> {
        NavModel::new(self.navigation.clone())
    }

    pub fn theme_tokens(&self) -> Result<ThemeTokens, SiteError> {
        let colors = self
            .theme
            .colors
            .iter()
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect();
        ThemeTokens::new(colors, self.theme.content.clone())
    }

    /// Check every invariant the renderers rely on.
    pub fn validate(&self) -> Result<(), SiteError> {
        self.site.validate()?;
        self.nav_model()?;
        self.theme_tokens()?;
        Ok(())
    }
}

/// Load `config/site.*` (optional) with `NEXUS_WEB__*` environment overrides.
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let site: SiteConfig = settings.try_deserialize()?;
    site.validate()?;
    Ok(site)
}

/// Parse a TOML document into a validated site configuration.
pub fn parse_site_config(toml: &str) -> anyhow::Result<SiteConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    let site: SiteConfig = settings.try_deserialize()?;
    site.validate()?;
    Ok(site)
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_navigation() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Documents", "/documents"),
        NavLink::new("Review", "/review"),
        NavLink::new("AWB", "/dashboards/awb"),
        NavLink::new("FIAR", "/dashboards/fiar"),
        NavLink::new("AECA", "/dashboards/aeca"),
        NavLink::new("AVIQM", "/dashboards/aviqm"),
        NavLink::new("Station", "/dashboards/station-analytics"),
    ]
}

fn default_home_panels() -> Vec<Panel> {
    vec![
        Panel::new(
            "Tenant Operations",
            "Document ingestion, review queues, and status tracking.",
        ),
        Panel::new(
            "Compliance",
            "AECA, AVIQM, and DG workflows with auditable outcomes.",
        ),
        Panel::new(
            "Analytics",
            "Throughput, bottlenecks, discrepancy trends, and SLA risk.",
        ),
    ]
}

fn default_station_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Throughput / hr", "26.4", "vs target 25.0"),
        MetricCard::new("Avg dwell (min)", "82", "loading zone bottleneck"),
        MetricCard::new("SLA risk", "9.2%", "amber threshold"),
        MetricCard::new("Delayed shipments", "31", "rolling 24h"),
    ]
}

fn default_colors() -> Vec<ColorConfig> {
    [
        ("slatebase", "#10192A"),
        ("seafoam", "#7FE7C4"),
        ("amberline", "#FFB454"),
    ]
    .into_iter()
    .map(|(name, value)| ColorConfig {
        name: name.to_string(),
        value: value.to_string(),
    })
    .collect()
}

fn default_content() -> Vec<String> {
    vec![
        "./app/**/*.{ts,tsx}".to_string(),
        "./components/**/*.{ts,tsx}".to_string(),
    ]
}
