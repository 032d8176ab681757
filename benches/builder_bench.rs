use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use termfmt::{Color, FormatBuilder, TERMINATOR};

fn benchmark_nested_push_pop(c: &mut Criterion) {
    c.bench_function("nested_push_pop", |b| {
        b.iter(|| {
            let mut fmt = FormatBuilder::new();
            for _ in 0..64 {
                fmt.red(black_box("error "))
                    .and_then(|f| f.bold(black_box("code ")))
                    .and_then(|f| f.underline(black_box("42")))
                    .and_then(|f| f.pop(""))
                    .and_then(|f| f.pop(""))
                    .and_then(|f| f.pop(" "))
                    .unwrap();
            }
            black_box(fmt.render())
        });
    });
}

fn benchmark_toggle_empty_spans(c: &mut Criterion) {
    c.bench_function("toggle_empty_spans", |b| {
        b.iter(|| {
            let mut fmt = FormatBuilder::new();
            for _ in 0..256 {
                fmt.background(Color::Blue, "")
                    .and_then(|f| f.background(Color::Blue, ""))
                    .unwrap();
            }
            black_box(fmt.render())
        });
    });
}

fn benchmark_merge_builders(c: &mut Criterion) {
    let mut inner = FormatBuilder::new();
    for i in 0..32 {
        inner
            .italic(format!("chunk {i}").as_str())
            .and_then(|f| f.pop(""))
            .unwrap();
    }

    c.bench_function("merge_builders", |b| {
        b.iter(|| {
            let mut outer = FormatBuilder::new();
            outer.green("[").unwrap();
            outer.write(black_box(&inner)).write("]");
            black_box(outer.render())
        });
    });
}

fn benchmark_write_with_terminators(c: &mut Criterion) {
    let text = format!("a{TERMINATOR}b").repeat(128);

    c.bench_function("write_with_terminators", |b| {
        b.iter(|| {
            let mut fmt = FormatBuilder::new();
            fmt.cyan("").unwrap();
            fmt.write(black_box(text.as_str()));
            black_box(fmt.render())
        });
    });
}

criterion_group!(
    benches,
    benchmark_nested_push_pop,
    benchmark_toggle_empty_spans,
    benchmark_merge_builders,
    benchmark_write_with_terminators
);
criterion_main!(benches);
