use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cortex_links::{DirectedLink, OutgoingLinks};

fn benchmark_points_to(c: &mut Criterion) {
    let link = DirectedLink::new(1234, 7);

    c.bench_function("points_to", |b| {
        b.iter(|| black_box(link).points_to(black_box(1234), black_box(7)));
    });
}

fn benchmark_outgoing_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("outgoing_lookup");

    for size in [8u32, 64, 512].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let links: OutgoingLinks = (0..size).map(|i| DirectedLink::new(i, i % 4)).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(links.contains_target(i, i % 4));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_points_to, benchmark_outgoing_lookup);
criterion_main!(benches);
