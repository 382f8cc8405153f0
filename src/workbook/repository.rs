use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::reader::read_store_table;
use super::writer::write_store_table;
use crate::store::StoreTable;

/// Where the store list used when none is supplied lives
#[derive(Debug, Clone)]
pub struct StoreListRepository {
    path: PathBuf,
}

impl StoreListRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted default list.
    ///
    /// A missing or unreadable file yields an empty table.
    pub fn load_default(&self) -> StoreTable {
        if !self.path.exists() {
            info!("No default store list at {:?}", self.path);
            return StoreTable::empty();
        }

        match read_store_table(&self.path) {
            Ok(table) => {
                debug!("Loaded {} stores from default list {:?}", table.len(), self.path);
                table
            }
            Err(e) => {
                warn!("Failed to load default store list {:?}: {:#}", self.path, e);
                StoreTable::empty()
            }
        }
    }

    /// Persist a table as the new default list
    pub fn replace_default(&self, table: &StoreTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        write_store_table(table, &self.path)?;
        info!("Saved {} stores as default list {:?}", table.len(), self.path);
        Ok(())
    }

    /// Load a supplied workbook and make it the new default
    pub fn upload<P: AsRef<Path>>(&self, source: P) -> Result<StoreTable> {
        let source = source.as_ref();
        let table = read_store_table(source)?;
        self.replace_default(&table)?;
        Ok(table)
    }
}
