//! CSV manifest persistence for luggage items.
//!
//! The manifest is the flat record set `{storage, excess, special,
//! compliance, weight, height, width, depth, unit}`. Saving then loading a
//! manifest reproduces value-equal items. Malformed rows are skipped with a
//! warning, never aborting the whole load.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use stowage_core::{LuggageItem, LuggageRecord};
use tracing::warn;

const FIELDS: [&str; 9] = [
    "storage",
    "excess",
    "special",
    "compliance",
    "weight",
    "height",
    "width",
    "depth",
    "unit",
];

/// Write items as CSV. An empty list still produces the header row.
pub fn write_manifest<W: Write>(writer: W, items: &[LuggageItem]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(FIELDS)?;
    for item in items {
        csv_writer.serialize(item.to_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_manifest(path: impl AsRef<Path>, items: &[LuggageItem]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed creating manifest at {}", path.display()))?;
    write_manifest(file, items)
        .with_context(|| format!("failed writing manifest to {}", path.display()))
}

/// Render items as an in-memory CSV string.
pub fn manifest_to_string(items: &[LuggageItem]) -> Result<String> {
    let mut buffer = Vec::new();
    write_manifest(&mut buffer, items)?;
    String::from_utf8(buffer).context("manifest is not valid UTF-8")
}

/// Read items from CSV. Rows that fail to parse or validate are skipped
/// with a warning naming the line.
pub fn read_manifest<R: Read>(reader: R) -> Result<Vec<LuggageItem>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut items = Vec::new();

    // Line 1 is the header.
    for (line, row) in csv_reader.deserialize::<LuggageRecord>().enumerate() {
        let line = line + 2;
        let record = match row {
            Ok(record) => record,
            Err(error) => {
                warn!(line, %error, "skipping unreadable manifest row");
                continue;
            }
        };
        match LuggageItem::from_record(&record) {
            Ok(item) => items.push(item),
            Err(error) => {
                warn!(line, %error, "skipping invalid manifest row");
            }
        }
    }

    Ok(items)
}

pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<LuggageItem>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("manifest not found at {}", path.display()))?;
    read_manifest(file).with_context(|| format!("failed reading manifest from {}", path.display()))
}
