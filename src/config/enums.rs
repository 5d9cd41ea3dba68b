/// Error type for configuration file handling.
pub mod configuration_error;
