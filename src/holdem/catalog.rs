use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::event;

use super::{HandCategory, StartingHand};
use crate::core::{CatalogIntegrityError, RangeTrainerError, Value};

/// Number of distinct starting hands in holdem.
pub const NUM_STARTING_HANDS: usize = 169;

/// Every starting hand label, written out by hand.
///
/// Pairs by descending value, then suited hands grouped by descending high
/// value with descending kicker, then offsuit hands in the same grouping.
#[rustfmt::skip]
const HAND_LABELS: [&str; NUM_STARTING_HANDS] = [
    // Pocket pairs
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    // Suited
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s",
    "QJs", "QTs", "Q9s", "Q8s", "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "Q2s",
    "JTs", "J9s", "J8s", "J7s", "J6s", "J5s", "J4s", "J3s", "J2s",
    "T9s", "T8s", "T7s", "T6s", "T5s", "T4s", "T3s", "T2s",
    "98s", "97s", "96s", "95s", "94s", "93s", "92s",
    "87s", "86s", "85s", "84s", "83s", "82s",
    "76s", "75s", "74s", "73s", "72s",
    "65s", "64s", "63s", "62s",
    "54s", "53s", "52s",
    "43s", "42s",
    "32s",
    // Offsuit
    "AKo", "AQo", "AJo", "ATo", "A9o", "A8o", "A7o", "A6o", "A5o", "A4o", "A3o", "A2o",
    "KQo", "KJo", "KTo", "K9o", "K8o", "K7o", "K6o", "K5o", "K4o", "K3o", "K2o",
    "QJo", "QTo", "Q9o", "Q8o", "Q7o", "Q6o", "Q5o", "Q4o", "Q3o", "Q2o",
    "JTo", "J9o", "J8o", "J7o", "J6o", "J5o", "J4o", "J3o", "J2o",
    "T9o", "T8o", "T7o", "T6o", "T5o", "T4o", "T3o", "T2o",
    "98o", "97o", "96o", "95o", "94o", "93o", "92o",
    "87o", "86o", "85o", "84o", "83o", "82o",
    "76o", "75o", "74o", "73o", "72o",
    "65o", "64o", "63o", "62o",
    "54o", "53o", "52o",
    "43o", "42o",
    "32o",
];

/// The process wide catalog. A catalog that fails verification
/// is fatal; nothing downstream is correct without exact coverage.
static GLOBAL: LazyLock<HandCatalog> = LazyLock::new(|| match HandCatalog::new() {
    Ok(catalog) => catalog,
    Err(e) => panic!("starting hand catalog is corrupt: {e}"),
});

/// Every starting hand in catalog order.
///
/// ```
/// use range_trainer::holdem::all_hands;
///
/// let hands = all_hands();
/// assert_eq!(169, hands.len());
/// assert_eq!("AA", hands[0].to_string());
/// assert_eq!("AKs", hands[13].to_string());
/// assert_eq!("AKo", hands[91].to_string());
/// ```
pub fn all_hands() -> &'static [StartingHand] {
    HandCatalog::global().hands()
}

/// The ordered, verified list of all 169 starting hands.
///
/// Build one with `HandCatalog::new` or borrow the shared one
/// with `HandCatalog::global`, then pass it around by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandCatalog {
    hands: Vec<StartingHand>,
}

impl HandCatalog {
    /// Build and verify the catalog from the literal label table.
    pub fn new() -> Result<Self, RangeTrainerError> {
        let hands = verify_labels(&HAND_LABELS)?;
        let catalog = Self { hands };
        event!(
            tracing::Level::INFO,
            total = catalog.len(),
            pairs = catalog.pairs().len(),
            suited = catalog.suited().len(),
            offsuit = catalog.offsuit().len(),
            "Starting hand catalog built"
        );
        Ok(catalog)
    }

    /// The shared catalog, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built in label table fails verification.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// All of the hands in catalog order.
    pub fn hands(&self) -> &[StartingHand] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StartingHand> {
        self.hands.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StartingHand> {
        self.hands.get(index)
    }

    /// Look up a hand by its label. Anything that isn't a
    /// well formed label is `None`.
    pub fn find(&self, label: &str) -> Option<&StartingHand> {
        let hand: StartingHand = label.parse().ok()?;
        self.get(hand.catalog_index())
    }

    /// Is `label` one of the catalog's hands?
    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    /// Position of `label` in catalog order.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.find(label).map(StartingHand::catalog_index)
    }

    /// The 13 pocket pairs.
    pub fn pairs(&self) -> &[StartingHand] {
        self.partition(HandCategory::Pair)
    }

    /// The 78 suited hands.
    pub fn suited(&self) -> &[StartingHand] {
        self.partition(HandCategory::Suited)
    }

    /// The 78 offsuit hands.
    pub fn offsuit(&self) -> &[StartingHand] {
        self.partition(HandCategory::OffSuit)
    }

    /// The contiguous block of hands with the given category.
    pub fn partition(&self, category: HandCategory) -> &[StartingHand] {
        let start = category.catalog_offset();
        &self.hands[start..start + category.class_count()]
    }

    /// Total number of concrete two card combos. Always 1326.
    pub fn total_combos(&self) -> usize {
        self.hands.iter().map(StartingHand::combo_count).sum()
    }

    /// The usual 13x13 range grid.
    ///
    /// Rows and columns run from ace down to two. The diagonal holds the
    /// pairs, suited hands sit above it and offsuit hands below it.
    ///
    /// ```
    /// use range_trainer::holdem::HandCatalog;
    ///
    /// let grid = HandCatalog::global().grid();
    /// assert_eq!("AA", grid[0][0].to_string());
    /// assert_eq!("AKs", grid[0][1].to_string());
    /// assert_eq!("AKo", grid[1][0].to_string());
    /// ```
    pub fn grid(&self) -> [[StartingHand; 13]; 13] {
        let desc: Vec<Value> = Value::descending().collect();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let hand = match row.cmp(&col) {
                    std::cmp::Ordering::Equal => StartingHand::pair(desc[row]),
                    std::cmp::Ordering::Less => {
                        StartingHand::from_parts(desc[row], desc[col], HandCategory::Suited)
                    }
                    std::cmp::Ordering::Greater => {
                        StartingHand::from_parts(desc[col], desc[row], HandCategory::OffSuit)
                    }
                };
                self.hands[hand.catalog_index()]
            })
        })
    }

    /// Where a hand sits in `grid()`, as `(row, col)`.
    pub fn grid_position(hand: &StartingHand) -> (usize, usize) {
        let high = 12 - hand.high() as usize;
        let low = 12 - hand.low() as usize;
        match hand.category() {
            HandCategory::Pair | HandCategory::Suited => (high, low),
            HandCategory::OffSuit => (low, high),
        }
    }

    /// Catalog hands that are not in `hands`, in catalog order.
    pub fn missing<'a, I>(&self, hands: I) -> Vec<StartingHand>
    where
        I: IntoIterator<Item = &'a StartingHand>,
    {
        let present: HashSet<&StartingHand> = hands.into_iter().collect();
        self.hands
            .iter()
            .filter(|h| !present.contains(h))
            .copied()
            .collect()
    }
}

impl<'a> IntoIterator for &'a HandCatalog {
    type Item = &'a StartingHand;
    type IntoIter = std::slice::Iter<'a, StartingHand>;

    fn into_iter(self) -> Self::IntoIter {
        self.hands.iter()
    }
}

/// Check that a table of labels is exactly the 169 starting hands in
/// catalog order, and parse it.
///
/// ```
/// use range_trainer::holdem::verify_labels;
///
/// assert!(verify_labels(&["AA", "KK"]).is_err());
/// ```
pub fn verify_labels(labels: &[&str]) -> Result<Vec<StartingHand>, RangeTrainerError> {
    verify(labels).map_err(|e| {
        event!(tracing::Level::ERROR, error = %e, "Starting hand catalog failed verification");
        RangeTrainerError::from(e)
    })
}

fn verify(labels: &[&str]) -> Result<Vec<StartingHand>, CatalogIntegrityError> {
    if labels.len() != NUM_STARTING_HANDS {
        return Err(CatalogIntegrityError::Size {
            expected: NUM_STARTING_HANDS,
            found: labels.len(),
        });
    }

    let hands = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            label
                .parse::<StartingHand>()
                .map_err(|e| CatalogIntegrityError::UnparsableLabel {
                    index,
                    label: label.to_string(),
                    source: Box::new(e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for category in HandCategory::categories() {
        let found = hands.iter().filter(|h| h.category() == category).count();
        if found != category.class_count() {
            return Err(CatalogIntegrityError::PartitionSize {
                partition: category.name(),
                expected: category.class_count(),
                found,
            });
        }
    }

    let mut seen = HashSet::with_capacity(NUM_STARTING_HANDS);
    if let Some(dup) = hands.iter().find(|h| !seen.insert(**h)) {
        return Err(CatalogIntegrityError::DuplicateLabel {
            label: dup.to_string(),
        });
    }

    for (index, (found, expected)) in hands.iter().zip(StartingHand::all()).enumerate() {
        if *found != expected {
            return Err(CatalogIntegrityError::OutOfOrder {
                index,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(hands)
}
