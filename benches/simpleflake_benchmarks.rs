use criterion::{criterion_group, criterion_main, Criterion};
use simpleflake::{Simpleflake, SimpleflakeConfig, SimpleflakeId};
use std::hint::black_box;

pub fn precision_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Precision Comparison");

    for &timestamp_bits in &[20, 32, 41, 48, 63] {
        let config = SimpleflakeConfig::builder()
            .timestamp_bits(timestamp_bits)
            .unwrap()
            .build();

        group.bench_function(
            format!("ts_{}_random_{}", timestamp_bits, config.random_bits()),
            |b| {
                let codec = Simpleflake::with_config(config);
                b.iter(|| {
                    black_box(codec.generate().unwrap());
                });
            },
        );
    }

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let codec = Simpleflake::new();
    let id = codec.generate().unwrap();
    let extract = codec.extractor();

    group.bench_function("extract_components", |b| {
        b.iter(|| {
            black_box(extract.decompose(black_box(id)));
        });
    });

    group.bench_function("decompose_with_snapshot", |b| {
        b.iter(|| {
            black_box(codec.decompose(black_box(id)));
        });
    });

    group.finish();
}

pub fn encoding_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encoding");
    let id = SimpleflakeId::from_raw(u64::MAX);
    let text = id.to_string();
    let json = id.to_json();

    group.bench_function("to_string", |b| b.iter(|| black_box(black_box(id).to_string())));
    group.bench_function("from_string", |b| {
        b.iter(|| black_box(SimpleflakeId::from_string(black_box(&text)).unwrap()))
    });
    group.bench_function("to_json", |b| b.iter(|| black_box(black_box(id).to_json())));
    group.bench_function("from_json", |b| {
        b.iter(|| black_box(SimpleflakeId::from_json(black_box(&json)).unwrap()))
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let codec = std::sync::Arc::new(Simpleflake::new());
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let codec = std::sync::Arc::clone(&codec);
                    handles.push(std::thread::spawn(move || {
                        black_box(codec.generate().unwrap());
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    precision_comparison,
    concurrent_benchmarks,
    component_extraction_benchmarks,
    encoding_benchmarks
);
criterion_main!(benches);
