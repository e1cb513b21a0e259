use criterion::{Criterion, criterion_group, criterion_main};
use hourlog::{FileSink, FixedClock, LineFormatter, Logger, Timestamp};
use std::hint::black_box;
use tempfile::TempDir;

const TS: Timestamp = Timestamp::new(2025, 1, 15, 14, 30, 0);

fn bench_render(c: &mut Criterion) {
    let formatter =
        LineFormatter::new("%YY/%MM/%DD", "%HH:%MM:%SS", true).expect("valid templates");

    c.bench_function("LineFormatter::render", |b| {
        b.iter(|| formatter.render(black_box("INFO"), black_box("benchmark message"), &TS));
    });
}

fn bench_persist(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let sink = FileSink::new(tmp.path(), 1024 * 1024);

    c.bench_function("FileSink::try_persist", |b| {
        b.iter(|| {
            sink.try_persist(black_box("benchmark log message"), &TS)
                .expect("write failed");
        });
    });
}

fn bench_log(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .backup_location(tmp.path())
        .console_output(false)
        .clock(FixedClock(TS))
        .build()
        .expect("valid config");

    c.bench_function("Logger::log", |b| {
        b.iter(|| {
            logger
                .log(black_box("benchmark log message"), "INFO", None)
                .expect("valid level");
        });
    });
}

criterion_group!(benches, bench_render, bench_persist, bench_log);
criterion_main!(benches);
