//! Support-card scraping: list page -> per-card detail pages.

use super::events::process_training_events;
use super::text::{normalize_entity_name, split_rarity};
use super::{ConsentGuard, list_entity_links, resolve_heading, SUPPORTS_URL, visit};
use crate::browser::ScrapeBrowser;
use crate::{RecordStore, ScrapeError, ScrapeJob};
use async_trait::async_trait;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SupportCardJob;

#[async_trait]
impl ScrapeJob for SupportCardJob {
    fn name(&self) -> &'static str {
        "supports"
    }

    fn url(&self) -> &'static str {
        SUPPORTS_URL
    }

    fn output_file(&self) -> &'static str {
        "supports.json"
    }

    async fn scrape(
        &self,
        browser: &ScrapeBrowser,
        store: &mut RecordStore,
    ) -> Result<(), ScrapeError> {
        let links = list_entity_links(browser.page()).await?;
        info!("Found {} support cards.", links.len());

        let mut consent = ConsentGuard::new();
        for (i, link) in links.iter().enumerate() {
            info!("Navigating to {} ({}/{})", link, i + 1, links.len());
            visit(browser, link).await?;
            consent.dismiss(browser.page()).await?;

            let heading = resolve_heading(browser.page()).await?;
            let name = normalize_entity_name(&heading, "Support Card");
            let (name, rarity) = split_rarity(&name);
            debug!("Support card {} has rarity {}.", name, rarity);

            let events = store.events_entry(&name);
            process_training_events(browser.page(), &name, events).await?;
        }

        Ok(())
    }
}
