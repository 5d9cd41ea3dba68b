//! Connection pool module.
//!
//! One bounded pool per cache client. Acquisition blocks up to a configured
//! timeout for a capacity permit; a connection idle past the revalidation
//! threshold must answer a ping before reuse. Release is RAII: dropping the
//! [`structs::pooled_connection::PooledConnection`] guard returns a healthy
//! connection to the idle set on every exit path, including cancellation,
//! and discards one that broke or was interrupted mid-request.
//!
//! The pool mutex is held only for bookkeeping, never across a network
//! call; capacity waits go through a semaphore. Invariant: idle + in-use
//! (plus pending connects) never exceeds the configured maximum.

/// Implementation blocks for the pool.
pub mod impls;

/// Pool data structures.
pub mod structs;
