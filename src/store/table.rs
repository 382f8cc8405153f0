//! In-memory store list loaded from a spreadsheet

use log::debug;
use std::collections::BTreeMap;

use super::error::StoreTableError;

pub const STORE_NUMBER_COLUMN: &str = "Store Number";
pub const STORE_NAME_COLUMN: &str = "Mall / Store Name";
pub const REGION_CODE_COLUMN: &str = "Region Code";

/// Marker value that sets a flag column for a row (compared upper-cased)
pub const FLAG_MARKER: &str = "X";

/// A single row of the store list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
    pub store_number: String,
    pub store_name: String,
    pub region_code: String,
    /// Flag column key -> raw cell value
    pub flags: BTreeMap<String, String>,
    cells: Vec<String>,
}

impl StoreRecord {
    /// All cells of the row in header order, including the required columns
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Raw value of a flag column, if the table has it
    pub fn flag(&self, column: &str) -> Option<&str> {
        self.flags.get(column).map(String::as_str)
    }

    /// Whether the flag column holds the `X` marker (case-insensitive)
    pub fn is_flagged(&self, column: &str) -> bool {
        self.flag(column)
            .map(|value| value.to_uppercase() == FLAG_MARKER)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequiredColumns {
    store_number: usize,
    store_name: usize,
    region_code: usize,
}

impl RequiredColumns {
    fn locate(headers: &[String]) -> Result<Self, StoreTableError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| StoreTableError::missing_column(name))
        };

        Ok(Self {
            store_number: find(STORE_NUMBER_COLUMN)?,
            store_name: find(STORE_NAME_COLUMN)?,
            region_code: find(REGION_CODE_COLUMN)?,
        })
    }

    fn contains(&self, idx: usize) -> bool {
        idx == self.store_number || idx == self.store_name || idx == self.region_code
    }
}

/// Ordered collection of store records plus the header row they were read with.
///
/// Rows are never patched; a reload builds a new table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreTable {
    headers: Vec<String>,
    records: Vec<StoreRecord>,
    /// Flag column key -> header position, built once at load
    flag_columns: BTreeMap<String, usize>,
}

impl StoreTable {
    /// A table with no columns and no rows, used when no store list could be loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from a header row and data rows.
    ///
    /// Short rows are padded with empty cells. A workbook with neither headers
    /// nor rows produces an empty table; anything else must carry the three
    /// required columns.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, StoreTableError> {
        if headers.is_empty() && rows.is_empty() {
            return Ok(Self::empty());
        }

        let required = RequiredColumns::locate(&headers)?;

        let mut flag_columns = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if required.contains(idx) {
                continue;
            }
            // First occurrence wins for duplicated headers
            flag_columns.entry(header.clone()).or_insert(idx);
        }

        let records = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(headers.len(), String::new());
                let flags = flag_columns
                    .iter()
                    .map(|(key, &idx)| (key.clone(), cells[idx].clone()))
                    .collect();

                StoreRecord {
                    store_number: cells[required.store_number].clone(),
                    store_name: cells[required.store_name].clone(),
                    region_code: cells[required.region_code].clone(),
                    flags,
                    cells,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Built store table with {} rows, {} columns ({} flag columns)",
            records.len(),
            headers.len(),
            flag_columns.len()
        );

        Ok(Self {
            headers,
            records,
            flag_columns,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[StoreRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoreRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flag column keys in sorted order
    pub fn flag_columns(&self) -> impl Iterator<Item = &str> {
        self.flag_columns.keys().map(String::as_str)
    }

    pub fn has_flag_column(&self, key: &str) -> bool {
        self.flag_columns.contains_key(key)
    }

    /// Case-insensitive check against every header, required columns included
    pub fn has_column_ignore_case(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.headers.iter().any(|h| h.to_lowercase() == name)
    }

    /// New table with the same headers holding clones of the given records
    pub fn subset<'a, I>(&self, records: I) -> StoreTable
    where
        I: IntoIterator<Item = &'a StoreRecord>,
    {
        StoreTable {
            headers: self.headers.clone(),
            records: records.into_iter().cloned().collect(),
            flag_columns: self.flag_columns.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a StoreTable {
    type Item = &'a StoreRecord;
    type IntoIter = std::slice::Iter<'a, StoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
