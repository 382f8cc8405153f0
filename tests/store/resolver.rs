use store_lookup::store::{StoreTableError, StoreTable, find_store, render_gl_code, resolve_region};

use super::{sample_table, table};

#[test]
fn test_resolve_by_store_name_ignores_case() {
    let stores = sample_table();
    assert_eq!(resolve_region(&stores, "RIVERSIDE MALL"), Some("07"));
    assert_eq!(resolve_region(&stores, "riverside mall"), Some("07"));
}

#[test]
fn test_resolve_by_store_number() {
    let stores = sample_table();
    assert_eq!(resolve_region(&stores, "42"), Some("07"));
    assert_eq!(resolve_region(&stores, "202"), Some("15"));
}

#[test]
fn test_resolve_trims_both_sides() {
    let stores = sample_table();
    assert_eq!(resolve_region(&stores, "  42  "), Some("07"));
    // Stored values carry padding too
    assert_eq!(resolve_region(&stores, "404"), Some("22"));
    assert_eq!(resolve_region(&stores, "harbour lights"), Some("22"));
}

#[test]
fn test_resolve_unknown_store_is_not_found() {
    let stores = sample_table();
    assert_eq!(resolve_region(&stores, "99"), None);
    assert_eq!(resolve_region(&stores, "Riverside"), None);
}

#[test]
fn test_first_matching_row_wins() {
    let stores = table(
        &["Store Number", "Mall / Store Name", "Region Code"],
        &[
            &["1", "Twin Mall", "A"],
            &["2", "twin mall", "B"],
            &["twin mall", "Other", "C"],
        ],
    );
    assert_eq!(resolve_region(&stores, "Twin Mall"), Some("A"));
    assert_eq!(find_store(&stores, "TWIN MALL").unwrap().store_number, "1");
}

#[test]
fn test_number_and_name_columns_both_match() {
    // A store number that equals another row's name: the earlier row wins
    let stores = table(
        &["Store Number", "Mall / Store Name", "Region Code"],
        &[&["7", "Seven Oaks", "A"], &["8", "7", "B"]],
    );
    assert_eq!(resolve_region(&stores, "7"), Some("A"));
}

#[test]
fn test_empty_table_resolves_nothing() {
    let stores = StoreTable::empty();
    assert!(stores.is_empty());
    assert_eq!(resolve_region(&stores, "42"), None);
}

#[test]
fn test_missing_required_column_rejected() {
    let result = StoreTable::from_rows(
        vec!["Store Number".to_string(), "Mall / Store Name".to_string()],
        vec![vec!["1".to_string(), "Somewhere".to_string()]],
    );
    assert_eq!(
        result.unwrap_err(),
        StoreTableError::MissingColumn {
            column: "Region Code".to_string()
        }
    );
}

#[test]
fn test_resolved_region_renders_gl_code() {
    let stores = sample_table();
    let region = resolve_region(&stores, "Riverside Mall").unwrap();
    assert_eq!(render_gl_code(region), "170.3010.07.000.6340.623020.000.0000");
}
