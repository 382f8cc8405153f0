use log::debug;
use std::collections::{HashMap, HashSet};

use super::resolver::normalize;
use super::similarity::close_matches;
use super::table::{StoreRecord, StoreTable};

/// Most distinct store names offered for disambiguation
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity ratio for a store name to be suggested
pub const SIMILARITY_CUTOFF: f64 = 0.4;

/// Rows whose store name is close to an identifier that failed exact lookup.
///
/// At most [`MAX_SUGGESTIONS`] distinct names qualify, but every row carrying
/// one of those names is returned, in table order.
pub fn suggest_candidates<'a>(table: &'a StoreTable, identifier: &str) -> Vec<&'a StoreRecord> {
    // Normalized name -> trimmed original; later rows overwrite earlier ones
    let mut names: HashMap<String, &str> = HashMap::new();
    for record in table {
        let name = record.store_name.trim();
        names.insert(name.to_lowercase(), name);
    }

    let word = normalize(identifier);
    let matches = close_matches(
        &word,
        names.keys().map(String::as_str),
        MAX_SUGGESTIONS,
        SIMILARITY_CUTOFF,
    );
    debug!("Fuzzy lookup for '{}' matched names {:?}", identifier, matches);

    if matches.is_empty() {
        return Vec::new();
    }

    let originals: HashSet<&str> = matches
        .iter()
        .filter_map(|normalized| names.get(*normalized).copied())
        .collect();

    table
        .iter()
        .filter(|record| originals.contains(record.store_name.trim()))
        .collect()
}

/// The first suggested row carrying exactly the chosen store name
pub fn pick_suggestion<'a>(candidates: &[&'a StoreRecord], store_name: &str) -> Option<&'a StoreRecord> {
    candidates
        .iter()
        .find(|record| record.store_name == store_name)
        .copied()
}
