#[cfg(test)]
mod config_tests {
    mod default_tests {
        use crate::config::structs::cache_config::CacheConfig;

        #[test]
        fn test_default_has_empty_host() {
            let config = CacheConfig::default();
            assert!(config.host.is_empty());
            assert_eq!(config.port, 6379);
        }

        #[test]
        fn test_default_pool_bounds() {
            let config = CacheConfig::default();
            assert!(config.pool_min <= config.pool_max);
            assert!(config.pool_max >= 1);
        }

        #[test]
        fn test_default_address() {
            let mut config = CacheConfig::default();
            config.host = "127.0.0.1".to_string();
            assert_eq!(config.address(), "127.0.0.1:6379");
        }
    }

    mod validate_tests {
        use crate::client::enums::backend_kind::BackendKind;
        use crate::config::structs::cache_config::CacheConfig;
        use crate::errors::CacheError;

        #[test]
        fn test_missing_host_fails_for_redis() {
            let config = CacheConfig::default();
            let result = config.validate(BackendKind::redis);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_missing_host_fails_for_memcache() {
            let config = CacheConfig::default();
            let result = config.validate(BackendKind::memcache);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_memory_backend_needs_no_host() {
            let config = CacheConfig::default();
            assert!(config.validate(BackendKind::memory).is_ok());
        }

        #[test]
        fn test_zero_pool_max_rejected() {
            let mut config = CacheConfig::default();
            config.pool_max = 0;
            config.pool_min = 0;
            let result = config.validate(BackendKind::memory);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_pool_min_above_max_rejected() {
            let mut config = CacheConfig::default();
            config.pool_min = 9;
            config.pool_max = 4;
            let result = config.validate(BackendKind::memory);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_zero_failure_threshold_rejected() {
            let mut config = CacheConfig::default();
            config.circuit_failure_threshold = 0;
            let result = config.validate(BackendKind::memory);
            assert!(matches!(result, Err(CacheError::ConfigError(_))));
        }

        #[test]
        fn test_complete_redis_record_passes() {
            let mut config = CacheConfig::default();
            config.host = "127.0.0.1".to_string();
            assert!(config.validate(BackendKind::redis).is_ok());
        }
    }

    mod file_tests {
        use crate::config::structs::cache_config::CacheConfig;

        #[test]
        fn test_load_partial_toml_fills_defaults() {
            let data = b"host = \"10.0.0.5\"\nport = 11211\npool_max = 2\n";
            let config = CacheConfig::load(data).unwrap();
            assert_eq!(config.host, "10.0.0.5");
            assert_eq!(config.port, 11211);
            assert_eq!(config.pool_max, 2);
            assert_eq!(config.key_prefix, "cache:");
            assert_eq!(config.max_retries, 3);
        }

        #[test]
        fn test_load_rejects_malformed_toml() {
            let data = b"host = [not toml";
            assert!(CacheConfig::load(data).is_err());
        }

        #[test]
        fn test_save_and_load_file_round_trip() {
            let dir = tempfile::tempdir().expect("Failed to create temp directory");
            let path = dir.path().join("cache.toml");
            let path = path.to_str().unwrap();

            let mut config = CacheConfig::default();
            config.host = "cache.internal".to_string();
            config.circuit_cooldown_ms = 1234;

            let rendered = toml::to_string(&config).unwrap();
            CacheConfig::save_file(path, rendered).unwrap();

            let loaded = CacheConfig::load_file(path).unwrap();
            assert_eq!(loaded.host, "cache.internal");
            assert_eq!(loaded.circuit_cooldown_ms, 1234);
        }

        #[test]
        fn test_load_file_missing_path_is_io_error() {
            use crate::config::enums::configuration_error::ConfigurationError;
            let result = CacheConfig::load_file("/nonexistent/cache.toml");
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }
    }

    mod error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            ));
            assert_eq!(format!("{}", error), "no such file");
        }
    }
}
