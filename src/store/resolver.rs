use log::debug;

use super::table::{StoreRecord, StoreTable};

/// Trim surrounding whitespace and lower-case, the comparison form for identifiers
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// First row whose store number or store name matches the identifier
pub fn find_store<'a>(table: &'a StoreTable, identifier: &str) -> Option<&'a StoreRecord> {
    let needle = normalize(identifier);
    table
        .iter()
        .find(|record| normalize(&record.store_number) == needle || normalize(&record.store_name) == needle)
}

/// Resolve a store number or name to its region code.
///
/// Matching is case-insensitive and ignores surrounding whitespace. When
/// several rows match, the first one in table order wins. `None` means the
/// identifier matched nothing.
pub fn resolve_region<'a>(table: &'a StoreTable, identifier: &str) -> Option<&'a str> {
    let found = find_store(table, identifier);
    debug!(
        "Exact lookup for '{}': {}",
        identifier,
        if found.is_some() { "hit" } else { "miss" }
    );
    found.map(|record| record.region_code.as_str())
}
