// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use wm_scrape::specs::reviews;

const PAGE: &str = include_str!("../tests/fixtures/review_page.html");

fn bench_extract(c: &mut Criterion) {
    let doc = Html::parse_document(PAGE);

    c.bench_function("extract_fixture_page", |b| {
        b.iter(|| {
            let reviews = reviews::extract(black_box(&doc));
            black_box(reviews.len())
        })
    });

    c.bench_function("parse_and_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(PAGE));
            let reviews = reviews::extract(&doc);
            black_box(reviews.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
