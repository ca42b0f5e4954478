//! In-memory record store, one per scrape job.
//!
//! Keys are entity display names in first-seen insertion order (serde_json's
//! `preserve_order` map). Duplicate inserts are skipped, never merged or
//! overwritten. The store lives exactly as long as its job and is written
//! out once at job end.

use crate::ScrapeError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Map<String, Value>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// First-seen-wins insert. Returns `false` (and leaves the existing
    /// record untouched) when `name` is already present.
    pub fn insert<T: Serialize>(&mut self, name: &str, record: &T) -> Result<bool, ScrapeError> {
        if self.records.contains_key(name) {
            return Ok(false);
        }
        self.records
            .insert(name.to_string(), serde_json::to_value(record)?);
        Ok(true)
    }

    /// The training-event map stored under `name`, created empty on first
    /// access. Later detail pages for name variants of the same entity get
    /// the same map, so their events merge without overwriting.
    pub fn events_entry(&mut self, name: &str) -> &mut Map<String, Value> {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .expect("event record is a JSON object")
    }

    /// Write the store to its output file: UTF-8, 4-space indent, full
    /// overwrite of any previous run.
    pub fn save(&self) -> Result<(), ScrapeError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut writer, formatter);
        self.records.serialize(&mut ser)?;
        writer.flush()?;
        info!("Saved {} items to {}", self.records.len(), self.path.display());
        Ok(())
    }
}
