use std::fmt;

/// Connection factory for a Memcache backend.
#[derive(Debug, Clone)]
pub struct CacheDriverMemcache {
    pub(crate) url: String,
}

pub struct CacheConnectionMemcache {
    pub(crate) client: memcache::Client,
}

impl fmt::Debug for CacheConnectionMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectionMemcache")
            .field("client", &"<memcache::Client>")
            .finish()
    }
}
