/// Store lookup tests, organized by component.

pub mod filter;
pub mod resolver;

use store_lookup::store::StoreTable;

/// Build a table from string literals, header row first
pub fn table(headers: &[&str], rows: &[&[&str]]) -> StoreTable {
    StoreTable::from_rows(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

/// Small store list with two flag columns
pub fn sample_table() -> StoreTable {
    table(
        &["Store Number", "Mall / Store Name", "Region Code", "Kids", "Scrubs"],
        &[
            &["42", "Riverside Mall", "07", "X", ""],
            &["101", "Northgate Plaza", "12", "", "x"],
            &["202", "Southpoint Centre", "15", "x", "X"],
            &["303", "Eastfield Mall", "07", "Y", ""],
            &[" 404 ", "  Harbour Lights  ", "22", "", ""],
        ],
    )
}
