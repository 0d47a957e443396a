use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sweeplib::config::SweepConfig;
use sweeplib::parser::{parse_output, Metrics};
use sweeplib::sweep::run_sweep;
use sweeplib::util::{simulator_line, StubRunner};

/// Parsing on its own, and a full sweep of the default grid against the in-process stub
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sweep");

    let line = simulator_line(100, 10, &Metrics { page_faults: 81_237, disk_reads: 80_011, disk_writes: 40_112 });
    group.bench_with_input(BenchmarkId::new("Parse", "one line"), &line, |bench, line| {
        bench.iter(|| parse_output(black_box(line)).unwrap());
    });

    let config = SweepConfig::default();
    group.bench_with_input(BenchmarkId::new("Stubbed sweep", "default grid"), &config, |bench, config| {
        bench.iter(|| run_sweep(config, &mut StubRunner::deterministic()).unwrap());
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = criterion_benchmark
);
criterion_main!(benches);
