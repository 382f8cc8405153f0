/// Test modules for store-lookup
///
/// Tests are organized into logical groupings:
/// - store: lookup, suggestion and filter behaviour over in-memory tables
/// - workbook: reading, writing and persisting .xlsx store lists
mod store;
