/// Cache client configuration record.
pub mod cache_config;
