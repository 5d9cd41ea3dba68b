/// The facade application code depends on.
pub mod cache_client;

/// Assembly point for drivers, pools and resilience policy.
pub mod client_factory;
