use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;

use rtail_buffer::tail;

fn generate_input(lines: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..lines {
        let line = format!("{i:08} the quick brown fox jumps over the lazy dog\n");
        data.extend_from_slice(line.as_bytes());
    }

    data
}

fn bench_tail(bench: &mut Criterion) {
    let data = generate_input(100_000);

    let mut group = bench.benchmark_group("tail");
    for capacity in [1usize, 10, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &data, |b, data| {
            b.iter(|| {
                let mut source = data.as_slice();
                let mut out = Vec::new();
                tail(&mut source, &mut out, capacity, |_| {}).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tail);
criterion_main!(benches);
