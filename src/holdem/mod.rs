/// Module for the starting hand label type.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{HandCategory, StartingHand};

/// The verified list of all 169 starting hands.
mod catalog;
/// Export `HandCatalog` and friends
pub use self::catalog::{HandCatalog, NUM_STARTING_HANDS, all_hands, verify_labels};

/// Module with all the range notation parsing code.
mod parse;
/// Export `RangeParser`
pub use self::parse::RangeParser;
