//! CSV loader for cost line items.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column     | Required | Notes                                        |
//! |------------|----------|----------------------------------------------|
//! | `category` | yes      | One of `fixed`, `variable`, `sunk`           |
//! | `id`       | no       | Generated as `<category>-<row>` when empty   |
//! | `name`     | yes      |                                              |
//! | `amount`   | no       | Won; thousands separators allowed, empty = 0 |
//!
//! ```csv
//! category,id,name,amount
//! fixed,1,임대료,"3,000,000"
//! variable,,포장비,500
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use econ_core::calculations::common::coerce_amount;
use econ_core::{CostCategory, CostCollectionError, CostCollections, CostItem};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading cost items.
#[derive(Debug, Error)]
pub enum CostItemLoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, header excluded.
    #[error("unrecognised category '{category}' on row {row}")]
    InvalidCategory { category: String, row: usize },

    #[error("row {row}: {source}")]
    InvalidItem {
        row: usize,
        source: CostCollectionError,
    },
}

impl From<csv::Error> for CostItemLoaderError {
    fn from(err: csv::Error) -> Self {
        CostItemLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a cost items CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CostItemRecord {
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Loader for cost items from CSV files.
pub struct CostItemLoader;

impl CostItemLoader {
    /// Parse cost items from a CSV reader into per-category collections.
    ///
    /// Rows keep file order within their category. Amounts go through the
    /// same lenient coercion as form input.
    ///
    /// # Errors
    ///
    /// * [`CostItemLoaderError::CsvParse`] for structurally invalid CSV.
    /// * [`CostItemLoaderError::InvalidCategory`] for an unknown category.
    /// * [`CostItemLoaderError::InvalidItem`] for a duplicate or reserved id.
    pub fn parse<R: Read>(reader: R) -> Result<CostCollections, CostItemLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut collections = CostCollections::default();

        for (idx, result) in csv_reader.deserialize::<CostItemRecord>().enumerate() {
            let record = result?;
            let row = idx + 1;

            let category = CostCategory::parse(&record.category).ok_or_else(|| {
                CostItemLoaderError::InvalidCategory {
                    category: record.category.clone(),
                    row,
                }
            })?;
            let id = record
                .id
                .unwrap_or_else(|| format!("{}-{}", category.as_str(), row));
            let item = CostItem::new(id, record.name, coerce_amount(&record.amount));

            collections
                .get_mut(category)
                .push(item)
                .map_err(|source| CostItemLoaderError::InvalidItem { row, source })?;
        }

        debug!(
            fixed = collections.fixed.len(),
            variable = collections.variable.len(),
            sunk = collections.sunk.len(),
            "Loaded cost items"
        );

        Ok(collections)
    }

    /// Convenience wrapper: open a file and delegate to [`CostItemLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<CostCollections, CostItemLoaderError> {
        let file = File::open(path).map_err(|source| CostItemLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}
