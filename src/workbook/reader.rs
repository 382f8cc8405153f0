use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook, open_workbook_from_rs};
use log::debug;
use std::io::Cursor;
use std::path::Path;

use crate::store::{StoreTable, StoreTableError};

/// Raw contents of a worksheet: first row as headers, the rest as data
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    fn from_range(range: &Range<Data>) -> Self {
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());

        let headers = rows.next().unwrap_or_default();
        let rows = rows
            .filter(|cells| cells.iter().any(|cell| !cell.is_empty()))
            .collect();

        SheetData { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn into_store_table(self) -> Result<StoreTable, StoreTableError> {
        StoreTable::from_rows(self.headers, self.rows)
    }
}

fn first_sheet<RS>(workbook: &mut Xlsx<RS>) -> Result<SheetData>
where
    RS: std::io::Read + std::io::Seek,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(StoreTableError::EmptyWorkbook)?
        .context("Failed to read first worksheet")?;

    let sheet = SheetData::from_range(&range);
    debug!(
        "Read worksheet with {} rows, {} columns",
        sheet.row_count(),
        sheet.column_count()
    );
    Ok(sheet)
}

/// Read the first worksheet of an `.xlsx` file
pub fn read_sheet<P: AsRef<Path>>(path: P) -> Result<SheetData> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    first_sheet(&mut workbook)
}

/// Load a store list from an `.xlsx` file
pub fn read_store_table<P: AsRef<Path>>(path: P) -> Result<StoreTable> {
    let path = path.as_ref();
    let table = read_sheet(path)?
        .into_store_table()
        .with_context(|| format!("Invalid store list: {}", path.display()))?;
    Ok(table)
}

/// Load a store list from in-memory `.xlsx` bytes
pub fn read_store_table_from_bytes(bytes: &[u8]) -> Result<StoreTable> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .context("Failed to parse workbook bytes")?;
    let table = first_sheet(&mut workbook)?
        .into_store_table()
        .context("Invalid store list")?;
    Ok(table)
}
