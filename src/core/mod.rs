//! This is the core module. It exports the card primitives
//! and the error types that everything else builds on.

/// card.rs has value, suit and card.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error types for the whole crate.
mod error;
/// Export the error types.
pub use self::error::{CatalogIntegrityError, RangeTrainerError};
