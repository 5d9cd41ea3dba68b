/// Cache backend enumeration (redis, memcache, memory).
pub mod backend_kind;
