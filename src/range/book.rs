use tracing::event;

use super::{KeyValueStore, RangeStoreError, SavedRange};

/// The key saved ranges live under unless told otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "savedRanges";

/// Settings for a `RangeBook`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeBookConfig {
    /// Store key holding the JSON array of saved ranges.
    pub storage_key: String,
}

impl Default for RangeBookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// RangeBook reads and writes the list of saved ranges kept as one JSON
/// array under a single key of a `KeyValueStore`.
///
/// Every operation is a full read, modify, write of that array. Saved
/// ranges are identified by their `position_combo`.
///
/// ```
/// use range_trainer::range::{ActionFrequencies, MemoryStore, RangeBook, SavedRange};
///
/// let mut book = RangeBook::new(MemoryStore::new());
/// let aces = "AA".parse().unwrap();
/// let range = SavedRange::new("BTN_vs_BB")
///     .with_hand(aces, ActionFrequencies::new(100.0, 0.0, 0.0));
///
/// book.save(range.clone()).unwrap();
/// assert_eq!(Some(range), book.find("BTN_vs_BB").unwrap());
/// ```
#[derive(Debug)]
pub struct RangeBook<S: KeyValueStore> {
    store: S,
    config: RangeBookConfig,
}

impl<S: KeyValueStore> RangeBook<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, RangeBookConfig::default())
    }

    pub fn with_config(store: S, config: RangeBookConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RangeBookConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// All saved ranges. Nothing stored yet is an empty list, while
    /// stored text that doesn't parse is an error.
    pub fn load(&self) -> Result<Vec<SavedRange>, RangeStoreError> {
        let ranges: Vec<SavedRange> = match self.store.get(&self.config.storage_key) {
            None => vec![],
            Some(text) => serde_json::from_str(&text)?,
        };
        event!(
            tracing::Level::TRACE,
            key = %self.config.storage_key,
            count = ranges.len(),
            "Loaded saved ranges"
        );
        Ok(ranges)
    }

    /// The saved range for `position_combo`, if there is one.
    pub fn find(&self, position_combo: &str) -> Result<Option<SavedRange>, RangeStoreError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|r| r.position_combo == position_combo))
    }

    /// Save a range, replacing any saved range for the same position
    /// combo and appending otherwise.
    pub fn save(&mut self, range: SavedRange) -> Result<(), RangeStoreError> {
        range.validate()?;
        let mut ranges = self.load()?;
        let replaced = match ranges
            .iter_mut()
            .find(|r| r.position_combo == range.position_combo)
        {
            Some(existing) => {
                *existing = range;
                true
            }
            None => {
                ranges.push(range);
                false
            }
        };
        event!(
            tracing::Level::DEBUG,
            replaced,
            count = ranges.len(),
            "Saving range"
        );
        self.write(&ranges)
    }

    /// Remove the saved range for `position_combo`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, position_combo: &str) -> Result<bool, RangeStoreError> {
        let mut ranges = self.load()?;
        let before = ranges.len();
        ranges.retain(|r| r.position_combo != position_combo);
        if ranges.len() == before {
            return Ok(false);
        }
        event!(tracing::Level::DEBUG, position_combo, "Removed saved range");
        self.write(&ranges)?;
        Ok(true)
    }

    /// Forget every saved range.
    pub fn clear(&mut self) {
        event!(tracing::Level::DEBUG, key = %self.config.storage_key, "Clearing saved ranges");
        self.store.delete(&self.config.storage_key);
    }

    fn write(&mut self, ranges: &[SavedRange]) -> Result<(), RangeStoreError> {
        let json = serde_json::to_string(ranges)?;
        self.store.set(&self.config.storage_key, json);
        Ok(())
    }
}
