//! Store list lookup: exact resolution, fuzzy suggestions and bulk filters

pub mod error;
pub mod filter;
pub mod gl_code;
pub mod resolver;
pub mod similarity;
pub mod suggest;
pub mod table;

pub use error::StoreTableError;
pub use filter::{FilterSpec, filter_by_flag, filter_by_numbers, filter_stores};
pub use gl_code::render_gl_code;
pub use resolver::{find_store, resolve_region};
pub use suggest::{MAX_SUGGESTIONS, SIMILARITY_CUTOFF, pick_suggestion, suggest_candidates};
pub use table::{
    REGION_CODE_COLUMN, STORE_NAME_COLUMN, STORE_NUMBER_COLUMN, StoreRecord, StoreTable,
};
