use crate::client::enums::backend_kind::BackendKind;
use crate::resilience::structs::resilience_wrapper::ResilienceWrapper;

/// Unified cache client for one configured backend.
///
/// The client is a pass-through: it validates and prefixes keys locally,
/// then delegates through the resilience wrapper, which borrows a pooled
/// connection and dispatches to the driver. Values are opaque byte
/// sequences; key/value/TTL semantics are preserved exactly.
///
/// Cloning is cheap and clones share the pool and circuit state.
#[derive(Debug, Clone)]
pub struct CacheClient {
    pub(crate) kind: BackendKind,
    pub(crate) key_prefix: String,
    pub(crate) resilience: ResilienceWrapper,
}
