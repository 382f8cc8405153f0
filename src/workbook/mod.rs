//! Reading, writing and persisting store list workbooks

pub mod reader;
pub mod repository;
pub mod writer;

pub use reader::{SheetData, read_sheet, read_store_table, read_store_table_from_bytes};
pub use repository::StoreListRepository;
pub use writer::{store_table_to_bytes, write_store_table};
