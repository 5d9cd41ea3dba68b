/// Acquisition, warm-up, release and replacement logic.
pub mod connection_pool;

/// Conversion from the configuration record.
pub mod pool_limits;

/// Guard behavior including release-on-drop.
pub mod pooled_connection;
