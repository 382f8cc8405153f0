use anyhow::Result;
use store_lookup::store::{filter_by_flag, filter_stores};
use store_lookup::workbook::{
    read_sheet, read_store_table, read_store_table_from_bytes, store_table_to_bytes,
    write_store_table,
};
use tempfile::TempDir;

use crate::store::{sample_table, table};

#[test]
fn test_filtered_subset_survives_export_and_reload() -> Result<()> {
    let stores = sample_table();
    let filtered = filter_stores(&stores, "101, 202,303")?;

    let bytes = store_table_to_bytes(&filtered)?;
    let reloaded = read_store_table_from_bytes(&bytes)?;

    assert_eq!(reloaded, filtered);
    Ok(())
}

#[test]
fn test_flag_subset_with_blank_cells_survives_file_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("filtered_stores.xlsx");

    let stores = sample_table();
    let kids = filter_by_flag(&stores, "kids")?;
    write_store_table(&kids, &path)?;

    let reloaded = read_store_table(&path)?;
    assert_eq!(reloaded, kids);
    assert_eq!(reloaded.records()[0].flag("Scrubs"), Some(""));
    Ok(())
}

#[test]
fn test_values_keep_text_form() -> Result<()> {
    let stores = table(
        &["Store Number", "Mall / Store Name", "Region Code"],
        &[&["007", " Padded Name ", "01"]],
    );

    let reloaded = read_store_table_from_bytes(&store_table_to_bytes(&stores)?)?;
    let record = &reloaded.records()[0];
    assert_eq!(record.store_number, "007");
    assert_eq!(record.store_name, " Padded Name ");
    assert_eq!(record.region_code, "01");
    Ok(())
}

#[test]
fn test_sheet_headers_and_rows() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("stores.xlsx");
    write_store_table(&sample_table(), &path)?;

    let sheet = read_sheet(&path)?;
    assert_eq!(sheet.column_count(), 5);
    assert_eq!(sheet.row_count(), 5);
    assert_eq!(sheet.headers[1], "Mall / Store Name");
    Ok(())
}

#[test]
fn test_workbook_without_required_columns_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Store Number")?;
    sheet.write_string(0, 1, "Name")?;
    sheet.write_string(1, 0, "1")?;
    sheet.write_string(1, 1, "Somewhere")?;
    workbook.save(&path)?;

    let err = read_store_table(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Mall / Store Name"));
    Ok(())
}

#[test]
fn test_numeric_cells_read_as_plain_text() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("numeric.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Store Number")?;
    sheet.write_string(0, 1, "Mall / Store Name")?;
    sheet.write_string(0, 2, "Region Code")?;
    sheet.write_number(1, 0, 42.0)?;
    sheet.write_string(1, 1, "Riverside Mall")?;
    sheet.write_number(1, 2, 7.0)?;
    workbook.save(&path)?;

    let stores = read_store_table(&path)?;
    assert_eq!(stores.records()[0].store_number, "42");
    assert_eq!(stores.records()[0].region_code, "7");
    Ok(())
}
