#![allow(dead_code)]
use std::sync::Arc;
use std::sync::Once;
use cachelink::client::enums::backend_kind::BackendKind;
use cachelink::client::structs::cache_client::CacheClient;
use cachelink::client::structs::client_factory::ClientFactory;
use cachelink::config::structs::cache_config::CacheConfig;
use cachelink::driver::structs::cache_driver_memory::CacheDriverMemory;
use cachelink::driver::traits::cache_driver::CacheDriver;

static INIT_LOGGING: Once = Once::new();

pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new()
            .trace(fern::colors::Color::Cyan)
            .debug(fern::colors::Color::Magenta)
            .info(fern::colors::Color::Green)
            .warn(fern::colors::Color::Yellow)
            .error(fern::colors::Color::Red);

        let _ = fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    colors.color(record.level()),
                    record.target(),
                    message,
                    width = 5
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(std::io::stdout())
            .apply();
    });
}

/// Configuration tuned for fast tests: no warm-up, tight timeouts, no
/// retries unless a test opts in.
pub fn create_test_config() -> CacheConfig {
    let mut config = CacheConfig::default();
    config.key_prefix = "test:".to_string();
    config.pool_min = 0;
    config.pool_max = 4;
    config.connect_timeout_ms = 500;
    config.acquire_timeout_ms = 200;
    config.call_timeout_ms = 200;
    config.max_retries = 0;
    config.retry_base_delay_ms = 1;
    config.retry_max_delay_ms = 4;
    config.circuit_failure_threshold = 2;
    config.circuit_window_ms = 10_000;
    config.circuit_cooldown_ms = 50;
    config
}

/// Builds a memory-backed client plus a handle onto its driver for
/// counters and failure injection.
pub fn create_memory_client(config: &CacheConfig) -> (CacheClient, CacheDriverMemory) {
    init_logging();
    let driver = CacheDriverMemory::new();
    let handle = driver.clone();
    let mut factory = ClientFactory::new();
    factory.register(BackendKind::memory, Box::new(move |_config| {
        Ok(Arc::new(driver.clone()) as Arc<dyn CacheDriver>)
    }));
    let client = factory.create(BackendKind::memory, config)
        .expect("Failed to build memory client");
    (client, handle)
}
