use async_trait::async_trait;
use tracing::info;

pub mod browser;
pub mod gametora;

mod error;
mod store;

pub use error::ScrapeError;
pub use store::RecordStore;

use browser::{ScrapeBrowser, settle};
use gametora::PAGE_SETTLE;

/// One scrape job: a fixed entry URL, a dedicated output file, and a
/// job-specific extraction body run against a fresh browser session.
#[async_trait]
pub trait ScrapeJob {
    fn name(&self) -> &'static str;
    fn url(&self) -> &'static str;
    fn output_file(&self) -> &'static str;

    async fn scrape(
        &self,
        browser: &ScrapeBrowser,
        store: &mut RecordStore,
    ) -> Result<(), ScrapeError>;
}

/// Drive one job end to end: launch a browser, open the job URL, scrape,
/// write the store, close the browser. Jobs never share a session.
pub async fn run_job<J>(job: &J) -> Result<(), ScrapeError>
where
    J: ScrapeJob + Sync,
{
    info!("Starting {} job: {}", job.name(), job.url());

    let browser = ScrapeBrowser::launch(job.url()).await?;
    settle(PAGE_SETTLE).await;

    let mut store = RecordStore::new(job.output_file());
    job.scrape(&browser, &mut store).await?;
    store.save()?;

    browser.close().await?;
    Ok(())
}
