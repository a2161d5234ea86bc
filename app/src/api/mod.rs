pub mod catalog;
pub mod common_types;
pub mod error;
