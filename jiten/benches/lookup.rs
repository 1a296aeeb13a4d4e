//! タームバンクの読み込みと検索のベンチマーク
//!
//! 生成したタームバンクの走査・復元速度と、構築済みインデックスに
//! 対する完全一致検索の速度を計測します。

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jiten::{Index, TermBank};

const ENTRIES: usize = 10_000;

/// 連番の語を持つタームバンクをひとつ生成します。
fn generate_bank(entries: usize) -> String {
    let rows: Vec<String> = (0..entries)
        .map(|i| {
            format!(
                "[\"term{i:05}\",\"reading\",\"tag\",\"rule\",0,[\"definition one\",\"definition two\"],{i},\"\"]"
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let bank = generate_bank(ENTRIES);
    let data = bank.as_bytes();

    let mut group = c.benchmark_group("Term Bank Parsing");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function(BenchmarkId::new("Exact Stride", ENTRIES), |b| {
        b.iter(|| TermBank::from_bytes(data, ENTRIES, "bench").unwrap());
    });

    // An undersized stride exercises the grow-and-retry loop.
    group.bench_function(BenchmarkId::new("Undersized Stride", ENTRIES), |b| {
        b.iter(|| TermBank::from_bytes(data, ENTRIES / 10, "bench").unwrap());
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let bank = generate_bank(ENTRIES);
    let parsed = TermBank::from_bytes(bank.as_bytes(), ENTRIES, "bench").unwrap();
    let index = Index::build(parsed.into_entries());

    let mut group = c.benchmark_group("Index Lookup");

    group.bench_function(BenchmarkId::new("Hit", ENTRIES), |b| {
        b.iter(|| index.lookup("term04999").unwrap());
    });

    group.bench_function(BenchmarkId::new("Miss", ENTRIES), |b| {
        b.iter(|| index.lookup("missing term"));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_lookup);
criterion_main!(benches);
