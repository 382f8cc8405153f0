use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::store::StoreTable;

const SHEET_NAME: &str = "Stores";

fn build_workbook(table: &StoreTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    write_table(sheet, table)?;
    Ok(workbook)
}

fn write_table(sheet: &mut Worksheet, table: &StoreTable) -> Result<()> {
    let header_format = Format::new().set_bold();

    for (col, header) in table.headers().iter().enumerate() {
        let col = u16::try_from(col).context("Too many columns for a worksheet")?;
        sheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (idx, record) in table.iter().enumerate() {
        let row = u32::try_from(idx + 1).context("Too many rows for a worksheet")?;
        for (col, value) in record.cells().iter().enumerate() {
            // Blank cells read back as empty strings
            if value.is_empty() {
                continue;
            }
            let col = u16::try_from(col).context("Too many columns for a worksheet")?;
            sheet.write_string(row, col, value)?;
        }
    }

    Ok(())
}

/// Serialize a store table into `.xlsx` bytes, every cell written as text
pub fn store_table_to_bytes(table: &StoreTable) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    workbook
        .save_to_buffer()
        .context("Failed to serialize store list workbook")
}

/// Write a store table to an `.xlsx` file
pub fn write_store_table<P: AsRef<Path>>(table: &StoreTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(table)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    Ok(())
}
