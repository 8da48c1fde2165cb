//! Extractor throughput on hiccup and HTML sources.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sift_analysis::extract;

fn hiccup_source(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "[:div.flex.items-center {{:class \"p-{} text-primary hover:bg-gray-{}\"}} \"row {}\"]\n",
                i % 8,
                (i % 9 + 1) * 100,
                i
            )
        })
        .collect()
}

fn html_source(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "<li class=\"btn btn-primary m-{}\"><a href=\"/p/{}.html\">x</a></li>\n",
                i % 6,
                i
            )
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for (name, source) in [("hiccup", hiccup_source(2_000)), ("html", html_source(2_000))] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| b.iter(|| extract(black_box(&source))));
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
