#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate range_trainer;

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use range_trainer::consistency::compare;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub a: Vec<String>,
    pub b: Vec<String>,
}

fuzz_target!(|input: Input| {
    let result = compare(&input.a, &input.b);
    let set_a: HashSet<&String> = input.a.iter().collect();
    let set_b: HashSet<&String> = input.b.iter().collect();

    assert_eq!(set_a.len(), result.intersection.len() + result.only_in_a.len());
    assert_eq!(set_b.len(), result.intersection.len() + result.only_in_b.len());
    assert_eq!(set_a == set_b, result.consistent);
});
