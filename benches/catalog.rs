#[macro_use]
extern crate criterion;
extern crate range_trainer;

use criterion::Criterion;
use range_trainer::holdem::{HandCatalog, StartingHand};

fn all_starting(c: &mut Criterion) {
    c.bench_function("Generate all starting hands", |b| b.iter(StartingHand::all));
}

fn build_catalog(c: &mut Criterion) {
    c.bench_function("Build and verify the hand catalog", |b| b.iter(HandCatalog::new));
}

fn iter_everything(c: &mut Criterion) {
    c.bench_function("Iter all possible hands from all starting hands", |b| {
        b.iter(|| -> usize {
            HandCatalog::global()
                .iter()
                .map(|sh| -> usize { sh.possible_hands().len() })
                .sum()
        })
    });
}

fn grid(c: &mut Criterion) {
    c.bench_function("Lay out the 13x13 grid", |b| {
        b.iter(|| HandCatalog::global().grid())
    });
}

criterion_group!(benches, all_starting, build_catalog, iter_everything, grid);
criterion_main!(benches);
