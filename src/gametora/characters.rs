//! Character scraping: list page -> per-character detail pages.

use super::events::process_training_events;
use super::text::normalize_entity_name;
use super::{
    CHARACTERS_URL, CLICK_SETTLE, ConsentGuard, list_entity_links, resolve_heading, visit,
};
use crate::browser::{ScrapeBrowser, settle};
use crate::{RecordStore, ScrapeError, ScrapeJob};
use async_trait::async_trait;
use chromiumoxide::page::Page;
use tracing::info;

const SORT_ROW: &str = "div[class*='filters_sort_row']";

#[derive(Debug)]
pub struct CharacterJob;

#[async_trait]
impl ScrapeJob for CharacterJob {
    fn name(&self) -> &'static str {
        "characters"
    }

    fn url(&self) -> &'static str {
        CHARACTERS_URL
    }

    fn output_file(&self) -> &'static str {
        "characters.json"
    }

    async fn scrape(
        &self,
        browser: &ScrapeBrowser,
        store: &mut RecordStore,
    ) -> Result<(), ScrapeError> {
        // Fix the grid order before reading links so runs are comparable.
        sort_by_name_ascending(browser.page()).await?;

        let links = list_entity_links(browser.page()).await?;
        info!("Found {} characters.", links.len());

        let mut consent = ConsentGuard::new();
        for (i, link) in links.iter().enumerate() {
            info!("Navigating to {} ({}/{})", link, i + 1, links.len());
            visit(browser, link).await?;
            consent.dismiss(browser.page()).await?;

            let heading = resolve_heading(browser.page()).await?;
            let name = normalize_entity_name(&heading, "(Original)");

            let events = store.events_entry(&name);
            process_training_events(browser.page(), &name, events).await?;
        }

        Ok(())
    }
}

/// Drive the two sort dropdowns: field "name", direction "asc".
async fn sort_by_name_ascending(page: &Page) -> Result<(), ScrapeError> {
    let sort_row = page.find_element(SORT_ROW).await?;
    let selects = sort_row.find_elements("select").await?;

    let field = selects.first().ok_or_else(|| {
        ScrapeError::UnexpectedStructure("sort row has no field dropdown".to_string())
    })?;
    field.click().await?;
    settle(CLICK_SETTLE).await;
    field
        .find_element("option[value='name']")
        .await?
        .click()
        .await?;
    settle(CLICK_SETTLE).await;

    let direction = selects.get(1).ok_or_else(|| {
        ScrapeError::UnexpectedStructure("sort row has no direction dropdown".to_string())
    })?;
    direction.click().await?;
    settle(CLICK_SETTLE).await;
    direction
        .find_element("option[value='asc']")
        .await?
        .click()
        .await?;
    settle(CLICK_SETTLE).await;

    Ok(())
}
