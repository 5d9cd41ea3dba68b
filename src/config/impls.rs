/// Loading, saving and validation for the configuration record.
pub mod cache_config;

/// Display and Error implementations for configuration errors.
pub mod configuration_error;
