//! Skill list scraping.
//!
//! The skills page is a flat table, no tooltips involved. Skill ids are
//! hidden behind a settings toggle, so the job first opens the filter
//! settings panel and enables both the id column and character-specific
//! skills before reading the rows.

use super::text::parse_skill_description;
use super::{CLICK_SETTLE, SKILLS_URL};
use crate::browser::{ScrapeBrowser, settle, text_of};
use crate::{RecordStore, ScrapeError, ScrapeJob};
use async_trait::async_trait;
use chromiumoxide::page::Page;
use serde::Serialize;
use tracing::info;

const SETTINGS_BUTTON: &str =
    "div[class*='utils_padbottom_half'] button[class*='filters_button_moreless']";
const SHOW_IDS_CHECKBOX: &str = "input[id*='showIdCheckbox']";
const SHOW_CHARACTER_SKILLS_CHECKBOX: &str = "input[id*='showUniqueCharCheckbox']";
const SKILL_ROW: &str = "div[class*='skills_table_row_ja']";
const SKILL_NAME: &str = "div[class*='skills_table_jpname']";
const SKILL_DESCRIPTION: &str = "div[class*='skills_table_desc']";

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: Option<u32>,
    pub english_name: String,
    pub english_description: String,
}

#[derive(Debug)]
pub struct SkillJob;

#[async_trait]
impl ScrapeJob for SkillJob {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn url(&self) -> &'static str {
        SKILLS_URL
    }

    fn output_file(&self) -> &'static str {
        "skills.json"
    }

    async fn scrape(
        &self,
        browser: &ScrapeBrowser,
        store: &mut RecordStore,
    ) -> Result<(), ScrapeError> {
        let page = browser.page();
        reveal_hidden_skill_columns(page).await?;

        let rows = page.find_elements(SKILL_ROW).await?;
        info!("Found {} non-hidden and hidden skill rows.", rows.len());

        for (i, row) in rows.iter().enumerate() {
            let name = text_of(&row.find_element(SKILL_NAME).await?).await?;
            let description = text_of(&row.find_element(SKILL_DESCRIPTION).await?).await?;
            let (id, english_description) = parse_skill_description(&description);

            if !name.is_empty() && !store.contains(&name) {
                info!("Scraped skill ({}/{}): {}", i + 1, rows.len(), name);
                store.insert(
                    &name,
                    &SkillRecord {
                        id,
                        english_name: name.clone(),
                        english_description,
                    },
                )?;
            }
        }

        Ok(())
    }
}

/// Open the settings dropdown and toggle "Show skill IDs" and the
/// character-specific skill checkbox.
async fn reveal_hidden_skill_columns(page: &Page) -> Result<(), ScrapeError> {
    page.find_element(SETTINGS_BUTTON).await?.click().await?;
    settle(CLICK_SETTLE).await;

    page.find_element(SHOW_IDS_CHECKBOX).await?.click().await?;
    settle(CLICK_SETTLE).await;

    page.find_element(SHOW_CHARACTER_SKILLS_CHECKBOX)
        .await?
        .click()
        .await?;
    settle(CLICK_SETTLE).await;

    Ok(())
}
