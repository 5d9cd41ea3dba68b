use redis::aio::MultiplexedConnection;

/// Connection factory for a Redis backend.
///
/// The `redis::Client` holds only the parsed connection info; every pooled
/// connection gets its own multiplexed async connection from it.
#[derive(Debug, Clone)]
pub struct CacheDriverRedis {
    pub(crate) client: redis::Client,
}

#[derive(Debug)]
pub struct CacheConnectionRedis {
    pub(crate) connection: MultiplexedConnection,
}
