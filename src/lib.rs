pub mod config;
pub mod store;
pub mod ui;
pub mod workbook;
