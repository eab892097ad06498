use criterion::criterion_main;

mod ordering;

criterion_main!(ordering::ordering);
