pub mod config;
pub mod filter;
pub mod lookup;
pub mod session;
pub mod upload;
