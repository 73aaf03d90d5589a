use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spectra::core::models::{Outcome, SessionMetadata};
use spectra::core::store::ResultStore;
use spectra::infra::libtest::LibtestMessage;
use spectra::reporting::html::render_report;
use std::hint::black_box;

fn populated_store(tests: usize) -> ResultStore {
    let mut store = ResultStore::new();
    for i in 0..tests {
        let id = format!("tests::case_{i}");
        let outcome = Outcome::ALL[i % Outcome::ALL.len()];
        match i % 4 {
            0 => store.attach(&id, vec!["prepare input", "call function", "check output"].into()),
            1 => store.attach(&id, "Checks <escaped> & quoted \"text\"".into()),
            _ => {}
        }
        store.record_outcome(&id, outcome);
        store.set_assertion(&id, "left == right");
    }
    store
}

fn bench_render_report(c: &mut Criterion) {
    let session = SessionMetadata::new("Bench");
    let mut group = c.benchmark_group("render_report");
    for tests in [10, 100, 1000, 5000] {
        let store = populated_store(tests);
        group.bench_with_input(BenchmarkId::from_parameter(tests), &store, |b, store| {
            b.iter(|| render_report(black_box(store), &session, "en"));
        });
    }
    group.finish();
}

fn bench_parse_libtest_line(c: &mut Criterion) {
    let line = r#"{ "type": "test", "name": "tests::it_works", "event": "ok", "exec_time": 0.001 }"#;
    c.bench_function("parse_libtest_line", |b| {
        b.iter(|| LibtestMessage::parse(black_box(line)));
    });
}

criterion_group!(benches, bench_render_report, bench_parse_libtest_line);
criterion_main!(benches);
