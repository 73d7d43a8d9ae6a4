//! Range Trainer is a library for poker range training tools.
//!
//! It carries the canonical list of the 169 holdem starting hands,
//! parsing for labels and range shorthand, the saved range records a
//! trainer persists, and a set comparison used to cross check two
//! independently computed collections of hands.

/// Card primitives and the crate error types. Everything in core
/// is agnostic to how hands get used.
pub mod core;
/// Holdem starting hands and the catalog of all of them.
pub mod holdem;
/// Set comparison of hand labels.
pub mod consistency;
/// Saved ranges and the store they live in.
#[cfg(feature = "serde")]
pub mod range;
