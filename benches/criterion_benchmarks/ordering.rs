use criterion::{black_box, criterion_group, Criterion};

use natural_order::{compare, compare_ignore_case, compare_ignore_case_wide, compare_wide};

pub fn character_heavy(c: &mut Criterion) {
    c.bench_function("compare with long common prefix", |b| b.iter(|| {
        compare(
            black_box("a-long-shared-prefix-without-digits-x"),
            black_box("a-long-shared-prefix-without-digits-y"),
        )
    }));
}

pub fn digit_heavy(c: &mut Criterion) {
    c.bench_function("compare with padded equal numbers", |b| b.iter(|| {
        compare(
            black_box("report-000000000000981-final"),
            black_box("report-0000981-final"),
        )
    }));
}

pub fn folded(c: &mut Criterion) {
    c.bench_function("compare_ignore_case with mixed case", |b| b.iter(|| {
        compare_ignore_case(black_box("Chapter19-INTRO"), black_box("chapter19-intro"))
    }));
}

pub fn wide(c: &mut Criterion) {
    c.bench_function("compare_wide with non-ascii text", |b| b.iter(|| {
        compare_wide(black_box("Ärger-Straße 21"), black_box("Ärger-Straße 105"))
    }));
}

pub fn wide_folded(c: &mut Criterion) {
    c.bench_function("compare_ignore_case_wide with non-ascii text", |b| b.iter(|| {
        compare_ignore_case_wide(black_box("ÄRGER-STRASSE 21"), black_box("ärger-strasse 105"))
    }));
}

pub fn sorting(c: &mut Criterion) {
    let listing: Vec<String> = (0..512)
        .map(|index| format!("shard-{:0>width$}.log", index * 7 % 512, width = index % 5 + 1))
        .collect();

    c.bench_function("sort 512 file names", |b| b.iter(|| {
        let mut sorted = listing.clone();
        sorted.sort_by(|s1, s2| compare(black_box(s1), black_box(s2)));
        sorted
    }));
}

criterion_group!(ordering,
    character_heavy,
    digit_heavy,
    folded,
    wide,
    wide_folded,
    sorting,
);
