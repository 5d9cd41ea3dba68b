/// The bounded pool itself.
pub mod connection_pool;

/// Size and timeout bounds fixed at construction.
pub mod pool_limits;

/// Point-in-time pool counters.
pub mod pool_status;

/// RAII guard for a checked-out connection.
pub mod pooled_connection;
