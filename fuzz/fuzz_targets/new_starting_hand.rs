#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate range_trainer;

use libfuzzer_sys::fuzz_target;
use range_trainer::core::Value;
use range_trainer::holdem::{HandCatalog, HandCategory, StartingHand};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub high: Value,
    pub low: Value,
    pub category: HandCategory,
}

fuzz_target!(|input: Input| {
    if let Ok(hand) = StartingHand::new(input.high, input.low, input.category) {
        let catalog = HandCatalog::global();
        assert_eq!(Some(&hand), catalog.get(hand.catalog_index()));
        assert_eq!(hand.combo_count(), hand.possible_hands().len());
        let (row, col) = HandCatalog::grid_position(&hand);
        assert_eq!(hand, catalog.grid()[row][col]);
    }
});
