use store_lookup::store::filter::capitalize;
use store_lookup::store::{FilterSpec, StoreTableError, filter_by_flag, filter_by_numbers, filter_stores};

use super::{sample_table, table};

fn numbers(stores: &store_lookup::store::StoreTable) -> Vec<String> {
    stores.iter().map(|r| r.store_number.clone()).collect()
}

#[test]
fn test_flag_marker_is_case_insensitive() {
    let stores = table(
        &["Store Number", "Mall / Store Name", "Region Code", "Kids"],
        &[
            &["1", "One", "01", "X"],
            &["2", "Two", "02", ""],
            &["3", "Three", "03", "x"],
            &["4", "Four", "04", "Y"],
        ],
    );

    let kids = filter_by_flag(&stores, "kids").unwrap();
    assert_eq!(numbers(&kids), vec!["1", "3"]);
}

#[test]
fn test_lower_case_flag_value_selected() {
    let stores = sample_table();
    let scrubs = filter_by_flag(&stores, "scrubs").unwrap();
    assert_eq!(numbers(&scrubs), vec!["101", "202"]);
}

#[test]
fn test_unknown_flag_is_missing_column() {
    let stores = sample_table();
    assert_eq!(
        filter_by_flag(&stores, "swim").unwrap_err(),
        StoreTableError::MissingColumn {
            column: "Swim".to_string()
        }
    );
}

#[test]
fn test_required_columns_are_not_flags() {
    let stores = sample_table();
    assert!(filter_by_flag(&stores, "Region Code").is_err());
}

#[test]
fn test_capitalize_keeps_rest_of_name() {
    assert_eq!(capitalize("kids"), "Kids");
    assert_eq!(capitalize("swimWear"), "SwimWear");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_number_list_ignores_spacing_around_commas() {
    let stores = sample_table();
    let selected = filter_by_numbers(&stores, "101, 202,303");
    assert_eq!(numbers(&selected), vec!["101", "202", "303"]);
}

#[test]
fn test_number_list_matches_stored_value_exactly() {
    let stores = sample_table();
    // Stored " 404 " keeps its padding, so a trimmed entry cannot match it
    assert!(filter_by_numbers(&stores, "404").is_empty());
    assert!(filter_by_numbers(&stores, "999, 4 2").is_empty());
}

#[test]
fn test_number_list_keeps_table_order_and_headers() {
    let stores = sample_table();
    let selected = filter_by_numbers(&stores, "303,42");
    assert_eq!(numbers(&selected), vec!["42", "303"]);
    assert_eq!(selected.headers(), stores.headers());
}

#[test]
fn test_dispatch_routes_column_names_to_flags() {
    let stores = sample_table();
    assert_eq!(FilterSpec::parse(&stores, "KIDS"), FilterSpec::Flag("kids".to_string()));
    assert_eq!(
        FilterSpec::parse(&stores, "42, 101"),
        FilterSpec::StoreNumbers(vec!["42".to_string(), "101".to_string()])
    );

    let kids = filter_stores(&stores, "Kids").unwrap();
    assert_eq!(numbers(&kids), vec!["42", "202"]);

    let listed = filter_stores(&stores, "42,101").unwrap();
    assert_eq!(numbers(&listed), vec!["42", "101"]);
}

#[test]
fn test_dispatch_prefers_flag_when_number_names_a_column() {
    let stores = table(
        &["Store Number", "Mall / Store Name", "Region Code", "2024"],
        &[&["2024", "Anniversary", "01", ""], &["7", "Seven", "02", "x"]],
    );

    let selected = filter_stores(&stores, "2024").unwrap();
    assert_eq!(numbers(&selected), vec!["7"]);
}

#[test]
fn test_no_matches_is_empty_subset() {
    let stores = sample_table();
    let selected = filter_stores(&stores, "555").unwrap();
    assert!(selected.is_empty());
    assert_eq!(selected.headers(), stores.headers());
}
