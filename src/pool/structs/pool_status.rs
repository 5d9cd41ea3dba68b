/// Point-in-time snapshot of the pool ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStatus {
    pub idle: usize,
    pub in_use: usize,
    pub pending: usize,
    pub max: usize,
}
