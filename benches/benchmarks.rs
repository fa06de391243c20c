//! Performance benchmarks for filesift

use chrono::{Local, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filesift::test_utils::TestDir;
use filesift::{
    DateFilter, ExtensionSet, FileRecord, FileWalker, Matcher, NoProgress, SearchConfig,
    Traversal, search,
};

fn create_tree(file_count: usize) -> TestDir {
    let dir = TestDir::new();
    let extensions = ["rs", "go", "py", "md"];
    for i in 0..file_count {
        let ext = extensions[i % extensions.len()];
        let path = format!("dir_{}/sub_{}/file_{}.{}", i % 10, i % 3, i, ext);
        dir.add_file_dated(&path, "content", 2024, 1 + (i % 12) as u32, 1 + (i % 28) as u32);
    }
    dir
}

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");

    let when = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let record = FileRecord::new("/src/project/main.rs", 2048, when);

    let no_filters = Matcher::default();
    group.bench_function("no_filters", |b| {
        b.iter(|| no_filters.matches(black_box(&record)))
    });

    let ext_and_year = Matcher::new(
        ExtensionSet::parse("rs,go,py,ts,js"),
        DateFilter::new(None, None, None, Some(2024)),
    );
    group.bench_function("extension_and_year", |b| {
        b.iter(|| ext_and_year.matches(black_box(&record)))
    });

    let exact = Matcher::new(
        ExtensionSet::default(),
        DateFilter::new(Some("15/1/2024"), None, None, None),
    );
    group.bench_function("exact_date", |b| b.iter(|| exact.matches(black_box(&record))));

    group.finish();
}

fn bench_extension_parse(c: &mut Criterion) {
    c.bench_function("extension_set_parse", |b| {
        b.iter(|| ExtensionSet::parse(black_box(" rs, .GO,py,ts,,js ")))
    });
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let medium = create_tree(100);
    group.bench_function("deep_100_files", |b| {
        b.iter(|| FileWalker::new(medium.path(), Traversal::Deep).visits().unwrap().count())
    });

    let large = create_tree(500);
    group.bench_function("deep_500_files", |b| {
        b.iter(|| FileWalker::new(large.path(), Traversal::Deep).visits().unwrap().count())
    });

    let mut config = SearchConfig::new(large.path()).with_extensions("rs");
    config.recursive = true;
    config.month = Some(3);
    group.bench_function("search_500_files_filtered", |b| {
        b.iter(|| search(black_box(&config), &mut NoProgress).unwrap().records.len())
    });

    group.finish();
}

criterion_group!(benches, bench_matcher, bench_extension_parse, bench_walk);
criterion_main!(benches);
