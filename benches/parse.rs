#[macro_use]
extern crate criterion;
extern crate range_trainer;

use criterion::Criterion;
use range_trainer::holdem::{RangeParser, StartingHand};

fn parse_label(c: &mut Criterion) {
    c.bench_function("Parse label AKo", |b| {
        b.iter(|| "AKo".parse::<StartingHand>());
    });
}

fn parse_ako(c: &mut Criterion) {
    c.bench_function("Parse AKo", |b| {
        b.iter(|| RangeParser::parse_one("AKo"));
    });
}

fn parse_pairs(c: &mut Criterion) {
    c.bench_function("Parse pairs (22+)", |b| {
        b.iter(|| RangeParser::parse_one("22+"));
    });
}

fn parse_plus(c: &mut Criterion) {
    c.bench_function("Parse plus (A2+)", |b| {
        b.iter(|| RangeParser::parse_one("A2+"));
    });
}

fn parse_list(c: &mut Criterion) {
    c.bench_function("Parse list (22+, A2s+, KTs+, AJo+, KQo)", |b| {
        b.iter(|| RangeParser::parse("22+, A2s+, KTs+, AJo+, KQo"));
    });
}

criterion_group!(
    benches,
    parse_label,
    parse_ako,
    parse_pairs,
    parse_plus,
    parse_list
);
criterion_main!(benches);
