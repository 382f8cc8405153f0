//! Bulk selection of stores by flag column or by a list of store numbers

use log::debug;

use super::error::StoreTableError;
use super::table::StoreTable;

/// How a bulk filter input is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    /// Flag name as typed, lower-cased
    Flag(String),
    /// Trimmed store numbers from a comma-separated list
    StoreNumbers(Vec<String>),
}

impl FilterSpec {
    /// Classify raw input against a table's headers.
    ///
    /// Input naming any column (ignoring case) is a flag, even when it also
    /// looks like a store number; everything else is a number list.
    pub fn parse(table: &StoreTable, input: &str) -> Self {
        if table.has_column_ignore_case(input) {
            FilterSpec::Flag(input.to_lowercase())
        } else {
            FilterSpec::StoreNumbers(split_store_numbers(input))
        }
    }
}

fn split_store_numbers(csv_list: &str) -> Vec<String> {
    csv_list.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Upper-case the first character, leaving the rest as typed
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rows whose flag column holds the `X` marker in any case.
///
/// The column key is the flag name with its first letter capitalized; a key
/// that names no flag column is reported as missing.
pub fn filter_by_flag(table: &StoreTable, flag_name: &str) -> Result<StoreTable, StoreTableError> {
    let key = capitalize(flag_name);
    if !table.has_flag_column(&key) {
        return Err(StoreTableError::missing_column(key));
    }

    let subset = table.subset(table.iter().filter(|record| record.is_flagged(&key)));
    debug!("Flag '{}' selected {} of {} stores", key, subset.len(), table.len());
    Ok(subset)
}

/// Rows whose store number exactly equals one of the comma-separated entries.
///
/// Entries are trimmed; store numbers are compared as stored.
pub fn filter_by_numbers(table: &StoreTable, csv_list: &str) -> StoreTable {
    let numbers = split_store_numbers(csv_list);
    select_numbers(table, &numbers)
}

fn select_numbers(table: &StoreTable, numbers: &[String]) -> StoreTable {
    let subset = table.subset(
        table
            .iter()
            .filter(|record| numbers.iter().any(|n| *n == record.store_number)),
    );
    debug!("Store number list selected {} of {} stores", subset.len(), table.len());
    subset
}

/// Apply a bulk filter input, routing it as [`FilterSpec::parse`] decides
pub fn filter_stores(table: &StoreTable, input: &str) -> Result<StoreTable, StoreTableError> {
    match FilterSpec::parse(table, input) {
        FilterSpec::Flag(flag) => filter_by_flag(table, &flag),
        FilterSpec::StoreNumbers(numbers) => Ok(select_numbers(table, &numbers)),
    }
}
