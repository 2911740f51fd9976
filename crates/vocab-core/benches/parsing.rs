use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vocab_core::parser::{parse_line, parse_line_with, SeparatorMode};
use vocab_core::store::entries_from_str;

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    let hyphen = "abate - to lessen";
    let em_dash = "elucidate \u{2014} to explain in detail";
    let colon_last = "succinct : brief and to the point";
    let bare = "gregarious";

    group.bench_function("hyphen", |b| b.iter(|| parse_line(black_box(hyphen))));
    group.bench_function("em_dash", |b| b.iter(|| parse_line(black_box(em_dash))));
    group.bench_function("colon_last", |b| {
        b.iter(|| parse_line(black_box(colon_last)))
    });
    group.bench_function("no_separator", |b| b.iter(|| parse_line(black_box(bare))));
    group.bench_function("bare_colon", |b| {
        b.iter(|| parse_line_with(black_box("frugal:thrifty"), SeparatorMode::BareColon))
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("entries_from_str");

    // A few thousand lines with a duplicate every tenth word.
    let file = {
        let mut s = String::new();
        for i in 0..3000 {
            let word = if i % 10 == 0 { 0 } else { i };
            s.push_str(&format!("word{word} - meaning number {i}\n"));
        }
        s
    };

    group.bench_function("3000_lines", |b| {
        b.iter(|| entries_from_str(black_box(&file)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_load);
criterion_main!(benches);
