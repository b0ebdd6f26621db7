pub mod base;
pub mod filter;
pub mod query;
