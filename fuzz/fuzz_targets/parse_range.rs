#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate range_trainer;
use range_trainer::holdem::RangeParser;
use std::collections::HashSet;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(hands) = RangeParser::parse(s) {
            let unique: HashSet<_> = hands.iter().collect();
            assert_eq!(unique.len(), hands.len());
            assert!(hands.len() <= 169);
        }
    }
});
