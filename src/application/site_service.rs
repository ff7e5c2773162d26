// Site service - Use cases for assembling page content
use crate::application::site_content::SiteContentSource;
use crate::domain::metric::{MetricCard, StationDashboard};
use crate::domain::navigation::NavModel;
use crate::domain::page::{Panel, SiteMetadata};
use crate::domain::theme::ThemeTokens;
use std::sync::Arc;

#[derive(Clone)]
pub struct SiteService {
    source: Arc<dyn SiteContentSource>,
}

impl SiteService {
    pub fn new(source: Arc<dyn SiteContentSource>) -> Self {
        Self { source }
    }

    pub fn metadata(&self) -> &SiteMetadata {
        self.source.metadata()
    }

    pub fn navigation(&self) -> &NavModel {
        self.source.navigation()
    }

    pub fn theme(&self) -> &ThemeTokens {
        self.source.theme()
    }

    pub async fn home_panels(&self) -> anyhow::Result<Vec<Panel>> {
        self.source.home_panels().await
    }

    pub async fn station_cards(&self) -> anyhow::Result<Vec<MetricCard>> {
        self.source.station_cards().await
    }

    pub async fn station_dashboard(&self) -> anyhow::Result<StationDashboard> {
        let intro = self.source.station_intro().await?;
        let cards = self.source.station_cards().await?;
        tracing::debug!("Station dashboard assembled with {} cards", cards.len());

        Ok(StationDashboard { intro, cards })
    }
}
