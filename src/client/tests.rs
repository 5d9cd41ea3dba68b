#[cfg(test)]
mod client_tests {
    mod backend_kind_tests {
        use crate::client::enums::backend_kind::BackendKind;

        #[test]
        fn test_backend_kind_display() {
            assert_eq!(format!("{}", BackendKind::redis), "redis");
            assert_eq!(format!("{}", BackendKind::memcache), "memcache");
            assert_eq!(format!("{}", BackendKind::memory), "memory");
        }

        #[test]
        fn test_backend_kind_url_scheme() {
            assert_eq!(BackendKind::redis.url_scheme(), "redis://");
            assert_eq!(BackendKind::memcache.url_scheme(), "memcache://");
            assert_eq!(BackendKind::memory.url_scheme(), "memory://");
        }

        #[test]
        fn test_backend_kind_serialization() {
            assert_eq!(serde_json::to_string(&BackendKind::redis).unwrap(), "\"redis\"");
            assert_eq!(serde_json::to_string(&BackendKind::memory).unwrap(), "\"memory\"");
        }

        #[test]
        fn test_backend_kind_deserialization() {
            let kind: BackendKind = serde_json::from_str("\"memcache\"").unwrap();
            assert_eq!(kind, BackendKind::memcache);
        }

        #[test]
        fn test_backend_kind_ordering() {
            assert!(BackendKind::redis < BackendKind::memcache);
            assert!(BackendKind::memcache < BackendKind::memory);
        }
    }

    mod key_validation_tests {
        use proptest::prelude::*;
        use crate::client::enums::backend_kind::BackendKind;
        use crate::client::impls::cache_client::MAX_KEY_LENGTH;
        use crate::client::structs::cache_client::CacheClient;
        use crate::client::structs::client_factory::ClientFactory;
        use crate::config::structs::cache_config::CacheConfig;
        use crate::errors::CacheError;

        fn memory_client(prefix: &str) -> CacheClient {
            let mut config = CacheConfig::default();
            config.key_prefix = prefix.to_string();
            config.pool_min = 0;
            ClientFactory::new().create(BackendKind::memory, &config).unwrap()
        }

        #[test]
        fn test_empty_key_rejected() {
            let client = memory_client("cache:");
            let result = client.cache_key("");
            assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        }

        #[test]
        fn test_key_is_prefixed() {
            let client = memory_client("app:");
            assert_eq!(client.cache_key("session:1").unwrap(), "app:session:1");
        }

        #[test]
        fn test_oversized_key_rejected_after_prefixing() {
            let client = memory_client("app:");
            let key = "k".repeat(MAX_KEY_LENGTH);
            let result = client.cache_key(&key);
            assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        }

        proptest! {
            #[test]
            fn test_reasonable_keys_always_validate(key in "[a-zA-Z0-9:_-]{1,64}") {
                let client = memory_client("cache:");
                let cache_key = client.cache_key(&key).unwrap();
                prop_assert!(cache_key.starts_with("cache:"));
                prop_assert!(cache_key.ends_with(&key));
                prop_assert!(cache_key.len() <= MAX_KEY_LENGTH);
            }
        }
    }

    mod factory_tests {
        use std::sync::Arc;
        use crate::client::enums::backend_kind::BackendKind;
        use crate::client::structs::client_factory::ClientFactory;
        use crate::config::structs::cache_config::CacheConfig;
        use crate::driver::structs::cache_driver_memory::CacheDriverMemory;
        use crate::driver::traits::cache_driver::CacheDriver;
        use crate::errors::CacheError;

        #[test]
        fn test_create_rejects_incomplete_config() {
            let factory = ClientFactory::new();
            let config = CacheConfig::default();
            let result = factory.create(BackendKind::redis, &config);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_create_builds_memory_client_from_defaults() {
            let factory = ClientFactory::new();
            let config = CacheConfig::default();
            let client = factory.create(BackendKind::memory, &config).unwrap();
            assert_eq!(client.kind(), BackendKind::memory);
            assert_eq!(client.pool_status().max, config.pool_max);
        }

        #[test]
        fn test_create_builds_redis_client_without_dialing() {
            let factory = ClientFactory::new();
            let mut config = CacheConfig::default();
            // No backend listens here; construction must still succeed.
            config.host = "127.0.0.1".to_string();
            config.port = 1;
            config.pool_min = 0;
            assert!(factory.create(BackendKind::redis, &config).is_ok());
        }

        #[test]
        fn test_unregistered_kind_rejected() {
            let factory = ClientFactory { constructors: std::collections::BTreeMap::new() };
            let config = CacheConfig::default();
            let result = factory.create(BackendKind::memory, &config);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[tokio::test]
        async fn test_registered_constructor_is_used() {
            let driver = CacheDriverMemory::new();
            let handle = driver.clone();
            let mut factory = ClientFactory::new();
            factory.register(BackendKind::memory, Box::new(move |_config| {
                Ok(Arc::new(driver.clone()) as Arc<dyn CacheDriver>)
            }));

            let mut config = CacheConfig::default();
            config.pool_min = 0;
            let client = factory.create(BackendKind::memory, &config).unwrap();
            client.set("probe", b"1", None).await.unwrap();
            assert_eq!(handle.request_count(), 1);
        }
    }
}
