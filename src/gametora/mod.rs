//! Scraping logic for gametora.com game data.
//!
//! One submodule per scrape job plus the shared navigation pieces. The
//! site is a JS-rendered SPA, so every selector targets the stable part of
//! its generated CSS-module class names and every navigation is followed by
//! a fixed settle pause.

pub mod characters;
pub mod events;
pub mod skills;
pub mod supports;
pub mod text;

pub use characters::CharacterJob;
pub use skills::SkillJob;
pub use supports::SupportCardJob;

use crate::browser::{find_opt, ScrapeBrowser, settle, text_of};
use crate::ScrapeError;
use chromiumoxide::page::Page;
use tokio::time::Duration;
use tracing::info;

const BASE_URL: &str = "https://gametora.com";
pub(crate) const SKILLS_URL: &str = "https://gametora.com/umamusume/skills";
pub(crate) const CHARACTERS_URL: &str = "https://gametora.com/umamusume/characters";
pub(crate) const SUPPORTS_URL: &str = "https://gametora.com/umamusume/supports";

/// Pause after a full page navigation.
pub(crate) const PAGE_SETTLE: Duration = Duration::from_secs(3);
/// Pause after small UI interactions (checkboxes, dropdowns, consent).
pub(crate) const CLICK_SETTLE: Duration = Duration::from_millis(100);
/// Pause after clicking a training-event trigger, for the tooltip overlay.
pub(crate) const TOOLTIP_SETTLE: Duration = Duration::from_millis(300);

const COOKIE_BUTTON: &str = "button[class*='legal_cookie_banner_button']";
const ENTITY_GRID: &str = "div[class*='dSgCQa']";
const ENTITY_LINK: &str = "a[class*='iAslZY']";
const DETAIL_HEADING: &str = "h1[class*='utils_headingXl']";

/// Best-effort, once-per-job cookie consent dismissal. A missing banner is
/// a normal outcome and counts as resolved.
#[derive(Debug, Default)]
pub struct ConsentGuard {
    accepted: bool,
}

impl ConsentGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn dismiss(&mut self, page: &Page) -> Result<(), ScrapeError> {
        if self.accepted {
            return Ok(());
        }
        match find_opt(page, COOKIE_BUTTON).await? {
            Some(button) => {
                button.click().await?;
                settle(CLICK_SETTLE).await;
                self.accepted = true;
                info!("Cookie consent accepted.");
            }
            None => {
                info!("No cookie consent button found.");
                self.accepted = true;
            }
        }
        Ok(())
    }
}

/// Collect every entity link in the list-page grid, in DOM order. Hrefs
/// come back as raw attributes, so relative ones are joined onto the site
/// origin.
pub async fn list_entity_links(page: &Page) -> Result<Vec<String>, ScrapeError> {
    let grid = page.find_element(ENTITY_GRID).await?;
    let items = grid.find_elements(ENTITY_LINK).await?;

    let mut links = Vec::with_capacity(items.len());
    for item in &items {
        let Some(href) = item.attribute("href").await? else {
            continue;
        };
        if href.starts_with("http") {
            links.push(href);
        } else {
            links.push(format!("{BASE_URL}{href}"));
        }
    }
    Ok(links)
}

/// Read the detail-page heading text.
pub async fn resolve_heading(page: &Page) -> Result<String, ScrapeError> {
    let heading = page.find_element(DETAIL_HEADING).await?;
    text_of(&heading).await
}

/// Navigate the session's page to a detail link and wait for it to render.
pub(crate) async fn visit(browser: &ScrapeBrowser, url: &str) -> Result<(), ScrapeError> {
    browser.goto(url).await?;
    settle(PAGE_SETTLE).await;
    Ok(())
}
