#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate range_trainer;
use range_trainer::holdem::{HandCatalog, StartingHand};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(hand) = s.parse::<StartingHand>() {
            // Anything that parses prints back exactly and is in the catalog.
            assert_eq!(s, hand.to_string());
            assert_eq!(Some(&hand), HandCatalog::global().find(s));
        }
    }
});
