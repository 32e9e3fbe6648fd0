//! Benchmarks for catalog operations

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shelfdb::catalog::Catalog;
use shelfdb::record::Record;

fn sample_catalog(size: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..size {
        catalog.add(Record::new(
            format!("Book {i}"),
            format!("Author {}", i % 50),
            1900 + (i as i64 % 120),
            match i % 4 {
                0 => "SciFi",
                1 => "Drama",
                2 => "Poetry",
                _ => "History",
            },
            (i % 7) as i64,
        ));
    }
    catalog
}

fn catalog_benchmarks(c: &mut Criterion) {
    let catalog = sample_catalog(1000);

    c.bench_function("search_by_author", |b| {
        b.iter(|| catalog.search(black_box(Some("Author 25")), None))
    });

    c.bench_function("genre_counts", |b| b.iter(|| black_box(catalog.genre_counts())));

    c.bench_function("total_copies", |b| b.iter(|| black_box(catalog.total_copies())));
}

criterion_group!(benches, catalog_benchmarks);
criterion_main!(benches);
