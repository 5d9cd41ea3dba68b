/// Driver and connection trait definitions.
pub mod cache_driver;
