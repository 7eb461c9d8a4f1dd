use barchart_rs::core::{LinearScale, NamedRecord, Viewport, project_columns, project_rows};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_position(c: &mut Criterion) {
    let scale = LinearScale::new(10_000.0, 0.0, 420.0).expect("valid scale");

    c.bench_function("linear_scale_position", |b| {
        b.iter(|| {
            let _ = scale.position(black_box(4_321.123)).expect("position");
        })
    });
}

fn generated_records(count: usize) -> Vec<NamedRecord> {
    (0..count)
        .map(|i| NamedRecord::new(format!("cat-{i}"), (i % 97) as f64))
        .collect()
}

fn bench_column_projection_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let plot = Viewport::new(890, 450);

    c.bench_function("column_projection_10k", |b| {
        b.iter(|| {
            let _ = project_columns(black_box(&records), plot, 0.1, 10).expect("projection");
        })
    });
}

fn bench_row_projection_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("row_projection_10k", |b| {
        b.iter(|| {
            let _ = project_rows(black_box(&records), 420.0, 20.0).expect("projection");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_position,
    bench_column_projection_10k,
    bench_row_projection_10k
);
criterion_main!(benches);
