use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use mseteq::{generate_pair, ByteStr, CStyleStr, CaseSpec, HeapStr, InlineStr, FIXED_LEN};

mod support;

const ELEM_LEN: usize = FIXED_LEN;

fn sweep() -> Vec<usize> {
    let floor = support::usize_env("MSETEQ_BENCH_MIN_N", 1024);
    let ceiling = support::usize_env("MSETEQ_BENCH_MAX_N", 1 << 20);
    let mut sizes = Vec::new();
    let mut n = floor.max(1);
    while n <= ceiling {
        sizes.push(n);
        n *= 2;
    }
    sizes
}

fn register<T: ByteStr>(group: &mut BenchmarkGroup<'_, WallTime>, repr: &str) {
    for case in CaseSpec::all(ELEM_LEN) {
        let name = case.name(repr);
        for n in sweep() {
            let (a, b): (Vec<T>, Vec<T>) =
                generate_pair(n, ELEM_LEN, case.distribution, support::next_seed());
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(&name, n), &n, |bencher, _| {
                bencher.iter(|| black_box(case.run(black_box(&a), black_box(&b))));
            });
        }
    }
}

fn bench_multiset_eq(c: &mut Criterion) {
    let measurement = support::duration_env("MSETEQ_BENCH_MEASUREMENT_SECS", 10.0);
    let warmup = support::duration_env("MSETEQ_BENCH_WARMUP_SECS", 3.0);
    let sample_size = support::usize_env("MSETEQ_BENCH_SAMPLE_SIZE", 10);

    let mut group = c.benchmark_group("multiset_eq");
    group.measurement_time(measurement);
    group.warm_up_time(warmup);
    group.sample_size(sample_size);
    group.sampling_mode(SamplingMode::Flat);

    register::<HeapStr>(&mut group, "heap_str");
    register::<InlineStr<ELEM_LEN>>(&mut group, "inline_str");
    register::<CStyleStr>(&mut group, "c_str");

    group.finish();
}

criterion_group!(benches, bench_multiset_eq);
criterion_main!(benches);
