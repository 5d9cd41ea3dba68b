/// Facade operations and key validation.
pub mod cache_client;

/// Factory registry, validation and assembly.
pub mod client_factory;
