use shortcode::{deshort_code, init, short_code};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_short_code(c: &mut Criterion) {
    c.bench_function("short_code", |b| b.iter(|| short_code(black_box(123))));
}

pub fn bench_deshort_code(c: &mut Criterion) {
    // Build the tables outside the measured loop.
    init();
    c.bench_function("deshort_code", |b| {
        b.iter(|| deshort_code(black_box("K8$PN")))
    });
}

criterion_group!(benches, bench_short_code, bench_deshort_code);
criterion_main!(benches);
