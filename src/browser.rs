//! Headless Chromium session used by every scrape job.
//!
//! Each job launches its own browser instance and closes it when done.
//! Element lookups come in two flavors: the plain `find_*` calls on
//! [`chromiumoxide::page::Page`] / [`chromiumoxide::element::Element`]
//! which propagate failures, and the `find_opt*` helpers below which map
//! "no such element" to `None` so callers can treat absence as a normal
//! outcome.

use crate::ScrapeError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::debug;

/// Locate the Chromium executable: `CHROME_PATH` env var first, then the
/// usual binary names on `PATH`. Returns `None` to let chromiumoxide fall
/// back to its own detection.
pub fn find_chromium() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("CHROME_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    None
}

/// One headless browser session with a single page.
pub struct ScrapeBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl ScrapeBrowser {
    /// Launch headless Chromium and open `url` in a fresh page.
    pub async fn launch(url: &str) -> Result<Self, ScrapeError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking");

        if let Some(path) = find_chromium() {
            debug!("Using Chromium executable at {}", path.display());
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(ScrapeError::Launch)?;

        let (browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser.new_page(url).await?;
        let _ = page.wait_for_navigation().await;

        Ok(Self {
            browser,
            handler_task,
            page,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate the session's page to another URL.
    pub async fn goto(&self, url: &str) -> Result<(), ScrapeError> {
        self.page.goto(url).await?;
        let _ = self.page.wait_for_navigation().await;
        Ok(())
    }

    pub async fn close(mut self) -> Result<(), ScrapeError> {
        self.browser.close().await?;
        self.handler_task.abort();
        Ok(())
    }
}

/// Fixed-duration pause for dynamically rendered content to settle.
pub async fn settle(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Single-element lookup where absence is expected: `Ok(None)` on no match.
pub async fn find_opt(page: &Page, selector: &str) -> Result<Option<Element>, ScrapeError> {
    match page.find_element(selector).await {
        Ok(el) => Ok(Some(el)),
        Err(CdpError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Like [`find_opt`] but scoped to a parent element.
pub async fn find_opt_in(
    parent: &Element,
    selector: &str,
) -> Result<Option<Element>, ScrapeError> {
    match parent.find_element(selector).await {
        Ok(el) => Ok(Some(el)),
        Err(CdpError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Rendered text of an element, trimmed; empty string when the node has no
/// text at all.
pub async fn text_of(el: &Element) -> Result<String, ScrapeError> {
    Ok(el
        .inner_text()
        .await?
        .unwrap_or_default()
        .trim()
        .to_string())
}
