//! Saved ranges and the key value store they are persisted in.

use thiserror::Error;

use crate::holdem::StartingHand;

/// RangeStoreError is the error type for reading and writing saved ranges.
#[derive(Error, Debug)]
pub enum RangeStoreError {
    #[error("Failed to serialize or parse saved ranges: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid {action} frequency {value} for {hand}")]
    InvalidFrequency {
        hand: StartingHand,
        action: &'static str,
        value: f64,
    },
}

mod book;
mod saved_range;
mod store;

pub use book::{DEFAULT_STORAGE_KEY, RangeBook, RangeBookConfig};
pub use saved_range::{ActionFrequencies, SavedRange};
pub use store::{KeyValueStore, MemoryStore};
