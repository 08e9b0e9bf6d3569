//! Criterion measurements of marker generation and statement assembly for both
//! dialects. Column sets are fixed so runs are comparable.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sql_dialect::prelude::*;

fn columns(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("column_{i}")).collect()
}

fn bench_marker_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_sequence");
    for dialect in [Dialect::Postgres, Dialect::SqlServer] {
        let hints = columns(32);
        group.bench_with_input(BenchmarkId::from_parameter(dialect), &hints, |b, hints| {
            b.iter(|| {
                let mut markers = dialect.bind_markers_factory().create();
                for hint in hints {
                    black_box(markers.next_with_hint(hint));
                }
            });
        });
    }
    group.finish();
}

fn bench_insert_and_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_and_bind");
    for count in [4usize, 16, 64] {
        let names = columns(count);
        let factory = StatementFactory::new(Dialect::SqlServer);
        group.bench_with_input(BenchmarkId::from_parameter(count), &names, |b, names| {
            b.iter(|| {
                let insert = factory.insert_and_return_generated_keys("bench", names);
                let mut params = BoundParams::new();
                for (i, name) in names.iter().enumerate() {
                    let value = RowValues::Int(i64::try_from(i).unwrap_or_default());
                    insert
                        .bind(&mut params, name, value)
                        .expect("registered column");
                }
                black_box(params);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_marker_sequences, bench_insert_and_bind);
criterion_main!(benches);
