// Performance benchmarks for cachelink
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use cachelink::client::enums::backend_kind::BackendKind;
use cachelink::client::structs::cache_client::CacheClient;
use cachelink::client::structs::client_factory::ClientFactory;
use cachelink::config::structs::cache_config::CacheConfig;
use cachelink::driver::structs::cache_driver_memory::CacheDriverMemory;
use cachelink::driver::traits::cache_driver::CacheDriver;

fn create_client() -> CacheClient {
    let mut config = CacheConfig::default();
    config.pool_min = 1;
    config.pool_max = 16;
    let driver = CacheDriverMemory::new();
    let mut factory = ClientFactory::new();
    factory.register(BackendKind::memory, Box::new(move |_config| {
        Ok(Arc::new(driver.clone()) as Arc<dyn CacheDriver>)
    }));
    factory.create(BackendKind::memory, &config).unwrap()
}

fn bench_set(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = rt.block_on(async { create_client() });

    c.bench_function("set", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(client.set("bench:set", b"payload", None).await.unwrap());
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = rt.block_on(async {
        let client = create_client();
        client.set("bench:get", b"payload", None).await.unwrap();
        client
    });

    c.bench_function("get", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(client.get("bench:get").await.unwrap());
        });
    });
}

fn bench_set_value_sizes(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = rt.block_on(async { create_client() });

    let mut group = c.benchmark_group("set_value_size");
    for size in [64usize, 1024, 16 * 1024, 256 * 1024].iter() {
        let value = vec![0u8; *size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.to_async(&rt).iter(|| async {
                black_box(client.set("bench:sized", value, None).await.unwrap());
            });
        });
    }
    group.finish();
}

fn bench_concurrent_gets(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = rt.block_on(async {
        let client = create_client();
        for index in 0..100u32 {
            let key = format!("bench:fan:{}", index);
            client.set(&key, b"payload", None).await.unwrap();
        }
        client
    });

    c.bench_function("concurrent_100_gets", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut handles = vec![];
                for index in 0..100u32 {
                    let client_clone = client.clone();
                    handles.push(tokio::spawn(async move {
                        let key = format!("bench:fan:{}", index);
                        client_clone.get(&key).await.unwrap()
                    }));
                }
                for handle in handles {
                    black_box(handle.await.unwrap());
                }
            });
        });
    });
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_set_value_sizes,
    bench_concurrent_gets
);
criterion_main!(benches);
