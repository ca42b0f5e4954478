//! Training-event tooltip extraction.
//!
//! Detail pages list training events as clickable viewer items; clicking
//! one opens a singleton tippy.js overlay holding a table of outcome rows.
//! Every trigger on the page is activated in turn and the rendered tooltip
//! is read into the entity's event map.

use super::text::format_event_option;
use super::TOOLTIP_SETTLE;
use crate::browser::{find_opt_in, settle, text_of};
use crate::ScrapeError;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use serde_json::{Map, Value};
use tracing::info;

const EVENT_TRIGGER: &str = "div[class*='compatibility_viewer_item']";
const TOOLTIP_ROOT: &str = "div[data-tippy-root]";
const TOOLTIP_HEADING: &str = "div[class*='tooltips_ttable_heading']";
const TOOLTIP_ROW: &str = "tr";
const TOOLTIP_CELL: &str = "td[class*='tooltips_ttable_cell']";

/// Open every training-event tooltip on the current detail page and record
/// its options under the tooltip title.
///
/// Soft skips, none of which stop the remaining triggers: a tooltip without
/// a heading, a tooltip with zero rows, and a title already present in
/// `events` (titles are never re-scraped within a job run).
pub async fn process_training_events(
    page: &Page,
    entity_name: &str,
    events: &mut Map<String, Value>,
) -> Result<(), ScrapeError> {
    let triggers = page.find_elements(EVENT_TRIGGER).await?;
    let total = triggers.len();
    info!("Found {} training events for {}.", total, entity_name);

    for (j, trigger) in triggers.iter().enumerate() {
        trigger.click().await?;
        settle(TOOLTIP_SETTLE).await;

        let tooltip = page.find_element(TOOLTIP_ROOT).await?;
        let Some(heading) = find_opt_in(&tooltip, TOOLTIP_HEADING).await? else {
            info!(
                "No tooltip title found for training event ({}/{}).",
                j + 1,
                total
            );
            continue;
        };
        let title = text_of(&heading).await?;

        let rows = tooltip.find_elements(TOOLTIP_ROW).await?;
        if rows.is_empty() {
            info!(
                "No options found for training event {} ({}/{}).",
                title,
                j + 1,
                total
            );
            continue;
        }
        if events.contains_key(&title) {
            info!(
                "Training event {} ({}/{}) already exists.",
                title,
                j + 1,
                total
            );
            continue;
        }

        info!(
            "Found {} options for training event {} ({}/{}).",
            rows.len(),
            title,
            j + 1,
            total
        );
        let options = extract_event_options(&rows).await?;
        events.insert(title, Value::from(options));
    }

    Ok(())
}

/// One option string per tooltip row, assembled from the text fragments of
/// the row's outcome cell.
async fn extract_event_options(rows: &[Element]) -> Result<Vec<String>, ScrapeError> {
    let mut options = Vec::with_capacity(rows.len());
    for row in rows {
        let cell = row
            .find_elements(TOOLTIP_CELL)
            .await?
            .into_iter()
            .nth(1)
            .ok_or_else(|| {
                ScrapeError::UnexpectedStructure("tooltip row has no outcome cell".to_string())
            })?;

        let mut fragments = Vec::new();
        for div in cell.find_elements("div").await? {
            fragments.push(text_of(&div).await?);
        }
        options.push(format_event_option(&fragments));
    }
    Ok(options)
}
