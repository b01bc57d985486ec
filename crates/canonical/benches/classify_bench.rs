use canonical::{classify, to_query, MAX_QUERY_CHARS};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for input in ["978-0-13-235088-4", "012345678X", "The Great Gatsby"] {
        group.bench_function(input, |b| b.iter(|| classify(black_box(input))));
    }

    group.finish();
}

fn bench_to_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_query");

    for size in [64, 512, 4096].iter() {
        let text = "word  ".repeat(*size / 6);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| to_query(black_box(&text), black_box(MAX_QUERY_CHARS)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_to_query);
criterion_main!(benches);
