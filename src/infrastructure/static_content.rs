// Static content source backed by the site configuration
use crate::application::site_content::SiteContentSource;
use crate::domain::error::SiteError;
use crate::domain::metric::{MetricCard, StationIntro};
use crate::domain::navigation::NavModel;
use crate::domain::page::{Panel, SiteMetadata};
use crate::domain::theme::ThemeTokens;
use crate::infrastructure::config::SiteConfig;
use async_trait::async_trait;

pub struct StaticSiteContent {
    metadata: SiteMetadata,
    navigation: NavModel,
    theme: ThemeTokens,
    home_panels: Vec<Panel>,
    station_intro: StationIntro,
    station_cards: Vec<MetricCard>,
}

impl StaticSiteContent {
    pub fn from_config(config: &SiteConfig) -> Result<Self, SiteError> {
        config.site.validate()?;

        Ok(Self {
            metadata: config.site.clone(),
            navigation: config.nav_model()?,
            theme: config.theme_tokens()?,
            home_panels: config.home_panels.clone(),
            station_intro: config.station.intro.clone(),
            station_cards: config.station.cards.clone(),
        })
    }
}

#[async_trait]
impl SiteContentSource for StaticSiteContent {
    fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    fn navigation(&self) -> &NavModel {
        &self.navigation
    }

    fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    async fn home_panels(&self) -> anyhow::Result<Vec<Panel>> {
        Ok(self.home_panels.clone())
    }

    async fn station_intro(&self) -> anyhow::Result<StationIntro> {
        Ok(self.station_intro.clone())
    }

    async fn station_cards(&self) -> anyhow::Result<Vec<MetricCard>> {
        Ok(self.station_cards.clone())
    }
}
