//! Benchmarks for the concurrent aggregation engine

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::StreamExt;

use wordfreq::processor::{FrequencyProcessor, OrderedResult};
use wordfreq::source::LineStream;
use wordfreq::Error;

fn synthetic_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|n| {
            format!(
                "alpha beta_{} gamma-{} delta epsilon_{} zeta",
                n % 97,
                n % 13,
                n % 7
            )
        })
        .collect()
}

fn line_stream(lines: &[String]) -> LineStream {
    futures::stream::iter(
        lines
            .iter()
            .map(|l| Ok::<_, Error>(l.clone()))
            .collect::<Vec<_>>(),
    )
    .boxed()
}

fn bench_aggregation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let lines = synthetic_lines(20_000);

    let mut group = c.benchmark_group("aggregation");
    group.throughput(Throughput::Elements(lines.len() as u64));
    for partition_size in [1usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(partition_size),
            &partition_size,
            |b, &partition_size| {
                b.to_async(&rt).iter(|| {
                    let stream = line_stream(&lines);
                    async move {
                        let processor = FrequencyProcessor::new(partition_size, 4).unwrap();
                        processor.count(stream).await.unwrap()
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let lines = synthetic_lines(20_000);

    c.bench_function("ordering", |b| {
        b.to_async(&rt).iter(|| {
            let stream = line_stream(&lines);
            async move {
                let processor = FrequencyProcessor::new(500, 4).unwrap();
                let table = processor.count(stream).await.unwrap();
                OrderedResult::from_table(table)
            }
        });
    });
}

criterion_group!(benches, bench_aggregation, bench_ordering);
criterion_main!(benches);
