// Content source trait for the rendered pages
use crate::domain::metric::{MetricCard, StationIntro};
use crate::domain::navigation::NavModel;
use crate::domain::page::{Panel, SiteMetadata};
use crate::domain::theme::ThemeTokens;
use async_trait::async_trait;

/// Supplies everything the pages display. The built-in implementation serves
/// configured literals; a live analytics feed can implement the same trait.
#[async_trait]
pub trait SiteContentSource: Send + Sync {
    fn metadata(&self) -> &SiteMetadata;

    fn navigation(&self) -> &NavModel;

    fn theme(&self) -> &ThemeTokens;

    async fn home_panels(&self) -> anyhow::Result<Vec<Panel>>;

    async fn station_intro(&self) -> anyhow::Result<StationIntro>;

    /// Cards in display order
    async fn station_cards(&self) -> anyhow::Result<Vec<MetricCard>>;
}
