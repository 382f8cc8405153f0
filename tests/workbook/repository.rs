use anyhow::Result;
use std::fs;
use store_lookup::store::resolve_region;
use store_lookup::workbook::{StoreListRepository, write_store_table};
use tempfile::TempDir;

use crate::store::sample_table;

#[test]
fn test_missing_default_is_empty_table() {
    let dir = TempDir::new().unwrap();
    let repository = StoreListRepository::new(dir.path().join("default_store_list.xlsx"));

    assert!(repository.load_default().is_empty());
}

#[test]
fn test_unreadable_default_is_empty_table() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("default_store_list.xlsx");
    fs::write(&path, b"definitely not a workbook")?;

    let repository = StoreListRepository::new(&path);
    assert!(repository.load_default().is_empty());
    Ok(())
}

#[test]
fn test_upload_becomes_new_default() -> Result<()> {
    let dir = TempDir::new()?;
    let upload_path = dir.path().join("upload.xlsx");
    write_store_table(&sample_table(), &upload_path)?;

    let repository = StoreListRepository::new(dir.path().join("nested").join("default_store_list.xlsx"));
    let uploaded = repository.upload(&upload_path)?;
    assert_eq!(uploaded, sample_table());

    let reloaded = repository.load_default();
    assert_eq!(reloaded, uploaded);
    assert_eq!(resolve_region(&reloaded, "riverside mall"), Some("07"));
    Ok(())
}

#[test]
fn test_failed_upload_keeps_previous_default() -> Result<()> {
    let dir = TempDir::new()?;
    let repository = StoreListRepository::new(dir.path().join("default_store_list.xlsx"));
    repository.replace_default(&sample_table())?;

    let bogus = dir.path().join("bogus.xlsx");
    fs::write(&bogus, b"nope")?;
    assert!(repository.upload(&bogus).is_err());

    assert_eq!(repository.load_default().len(), 5);
    Ok(())
}
