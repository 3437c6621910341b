pub mod config;
pub mod error;
pub mod fix;
pub mod parse;
pub mod report;
pub mod validate;
