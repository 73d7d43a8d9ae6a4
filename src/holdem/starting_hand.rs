use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::{Card, RangeTrainerError, Suit, Value};

/// Which of the three kinds of starting hand a label is.
///
/// `HandCategory::Pair` is two cards of the same value.
/// `HandCategory::Suited` is two different values of the same suit.
/// `HandCategory::OffSuit` is two different values of different suits.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum HandCategory {
    /// Both cards share a value.
    Pair,
    /// Both cards share a suit.
    Suited,
    /// The cards have different suits and values.
    OffSuit,
}

/// All of the categories in the order the catalog lists them.
const CATEGORIES: [HandCategory; 3] = [
    HandCategory::Pair,
    HandCategory::Suited,
    HandCategory::OffSuit,
];

impl HandCategory {
    /// All of the categories, pairs first.
    pub fn categories() -> [Self; 3] {
        CATEGORIES
    }

    /// How many distinct starting hands have this category.
    pub fn class_count(self) -> usize {
        match self {
            Self::Pair => 13,
            Self::Suited | Self::OffSuit => 78,
        }
    }

    /// How many concrete two card combos one label of this category covers.
    pub fn combos_per_class(self) -> usize {
        match self {
            Self::Pair => 6,
            Self::Suited => 4,
            Self::OffSuit => 12,
        }
    }

    /// The suffix used in labels. Pairs don't get one.
    pub fn suffix(self) -> Option<char> {
        match self {
            Self::Pair => None,
            Self::Suited => Some('s'),
            Self::OffSuit => Some('o'),
        }
    }

    /// Human readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::Suited => "suited",
            Self::OffSuit => "offsuit",
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Suited),
            'o' => Some(Self::OffSuit),
            _ => None,
        }
    }

    /// Where this category's block starts in the catalog.
    pub(crate) fn catalog_offset(self) -> usize {
        match self {
            Self::Pair => 0,
            Self::Suited => 13,
            Self::OffSuit => 13 + 78,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `StartingHand` is one of the 169 classes of two card holdem
/// starting hands, the thing written as `AA`, `AKs` or `72o`.
///
/// The higher value always comes first. It can only be built in a
/// valid state, either through `StartingHand::new` or by parsing a label.
///
/// ```
/// use range_trainer::core::Value;
/// use range_trainer::holdem::{HandCategory, StartingHand};
///
/// let hand: StartingHand = "AKs".parse().unwrap();
/// assert_eq!(Value::Ace, hand.high());
/// assert_eq!(Value::King, hand.low());
/// assert_eq!(HandCategory::Suited, hand.category());
/// assert_eq!("AKs", hand.to_string());
/// ```
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct StartingHand {
    /// The higher (or equal for pairs) value.
    high: Value,
    /// The lower value, the kicker.
    low: Value,
    category: HandCategory,
}

impl StartingHand {
    /// Create a starting hand, checking that the values fit the category.
    ///
    /// Values given low first are an error rather than being swapped.
    pub fn new(high: Value, low: Value, category: HandCategory) -> Result<Self, RangeTrainerError> {
        match category {
            HandCategory::Pair if high != low => Err(RangeTrainerError::PairValuesDiffer {
                high: high.to_char(),
                low: low.to_char(),
            }),
            HandCategory::Suited | HandCategory::OffSuit if high == low => {
                Err(RangeTrainerError::InvalidSuitedPairs)
            }
            _ if high < low => Err(RangeTrainerError::RankOrder {
                high: high.to_char(),
                low: low.to_char(),
            }),
            _ => Ok(Self::from_parts(high, low, category)),
        }
    }

    /// Callers guarantee `high > low` for suited and offsuit hands.
    pub(crate) fn from_parts(high: Value, low: Value, category: HandCategory) -> Self {
        Self {
            high,
            low,
            category,
        }
    }

    /// Create a pocket pair.
    pub fn pair(value: Value) -> Self {
        Self::from_parts(value, value, HandCategory::Pair)
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.category == HandCategory::Pair
    }

    /// Position of this hand in the canonical catalog order.
    ///
    /// Pairs take 0..13, suited hands 13..91 and offsuit hands 91..169.
    /// Inside a block hands are grouped by descending high value and then
    /// descending kicker.
    pub fn catalog_index(&self) -> usize {
        let h = self.high as usize;
        let l = self.low as usize;
        let within = match self.category {
            HandCategory::Pair => 12 - h,
            // Every high value above `h` contributes one hand per lower value.
            HandCategory::Suited | HandCategory::OffSuit => 78 - h * (h + 1) / 2 + (h - 1 - l),
        };
        self.category.catalog_offset() + within
    }

    /// Create every possible unique StartingHand in catalog order.
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(169);
        hands.extend(Value::descending().map(Self::pair));
        for category in [HandCategory::Suited, HandCategory::OffSuit] {
            for high in Value::descending() {
                for low in Value::descending().filter(|low| *low < high) {
                    hands.push(Self::from_parts(high, low, category));
                }
            }
        }
        hands
    }

    /// How many concrete card combos this label covers.
    pub fn combo_count(&self) -> usize {
        self.category.combos_per_class()
    }

    /// Get all the possible two card hands represented by this label.
    pub fn possible_hands(&self) -> Vec<[Card; 2]> {
        self.combos()
    }

    /// The concrete two card combos: 6 for a pair, 4 suited, 12 offsuit.
    pub fn combos(&self) -> Vec<[Card; 2]> {
        match self.category {
            HandCategory::Suited => self.create_suited(),
            HandCategory::Pair | HandCategory::OffSuit => self.create_offsuit(),
        }
    }

    /// Create a new vector of all suited hands.
    fn create_suited(&self) -> Vec<[Card; 2]> {
        Suit::suits()
            .iter()
            .map(|s| [Card::new(self.high, *s), Card::new(self.low, *s)])
            .collect()
    }

    /// Create a new vector of all the off suit hands.
    fn create_offsuit(&self) -> Vec<[Card; 2]> {
        let suits = Suit::suits();
        let mut hands = Vec::with_capacity(self.combo_count());
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                hands.push([Card::new(self.high, *suit_one), Card::new(self.low, *suit_two)]);

                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    hands.push([Card::new(self.high, *suit_two), Card::new(self.low, *suit_one)]);
                }
            }
        }
        hands
    }
}

impl Ord for StartingHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.catalog_index().cmp(&other.catalog_index())
    }
}

impl PartialOrd for StartingHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.to_char(), self.low.to_char())?;
        if let Some(suffix) = self.category.suffix() {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl FromStr for StartingHand {
    type Err = RangeTrainerError;

    /// Parse a single label. This is strict: upper case values,
    /// higher value first, and a suffix exactly when it's not a pair.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        let high = Value::try_from(chars.next().ok_or(RangeTrainerError::TooFewChars)?)?;
        let low = Value::try_from(chars.next().ok_or(RangeTrainerError::TooFewChars)?)?;

        let category = match chars.next() {
            None if high == low => HandCategory::Pair,
            None => return Err(RangeTrainerError::MissingSuitedness),
            Some(c) => match HandCategory::from_suffix(c) {
                Some(_) if high == low => return Err(RangeTrainerError::InvalidSuitedPairs),
                Some(category) => category,
                None => return Err(RangeTrainerError::UnexpectedModifierChar(c)),
            },
        };

        if chars.next().is_some() {
            return Err(RangeTrainerError::UnparsedCharsRemaining);
        }
        Self::new(high, low, category)
    }
}

impl TryFrom<&str> for StartingHand {
    type Error = RangeTrainerError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl TryFrom<String> for StartingHand {
    type Error = RangeTrainerError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<StartingHand> for String {
    fn from(hand: StartingHand) -> Self {
        hand.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_aces() {
        let sh = StartingHand::pair(Value::Ace);
        assert_eq!(6, sh.possible_hands().len());
    }

    #[test]
    fn test_suited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, HandCategory::Suited).unwrap();
        let hands = sh.possible_hands();
        assert_eq!(4, hands.len());
        assert!(hands.iter().all(|[a, b]| a.suit == b.suit));
    }

    #[test]
    fn test_unsuited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, HandCategory::OffSuit).unwrap();
        let hands = sh.possible_hands();
        assert_eq!(12, hands.len());
        assert!(hands.iter().all(|[a, b]| a.suit != b.suit));
    }

    #[test]
    fn test_combos_match_possible_hands() {
        for hand in StartingHand::all() {
            let combos = hand.combos();
            assert_eq!(hand.combo_count(), combos.len(), "{}", hand);
            assert_eq!(hand.possible_hands(), combos);
        }
    }

    #[test]
    fn test_starting_hand_count() {
        let num_to_test: usize = StartingHand::all()
            .iter()
            .map(|h| h.possible_hands().len())
            .sum();
        assert_eq!(1326, num_to_test);
    }

    #[test]
    fn test_all_combos_unique() {
        let combos: HashSet<[Card; 2]> = StartingHand::all()
            .iter()
            .flat_map(|h| h.possible_hands())
            .collect();
        assert_eq!(1326, combos.len());
    }

    #[test]
    fn test_all_matches_catalog_index() {
        for (i, hand) in StartingHand::all().iter().enumerate() {
            assert_eq!(i, hand.catalog_index(), "{}", hand);
        }
    }

    #[test]
    fn test_catalog_index_landmarks() {
        let idx = |s: &str| s.parse::<StartingHand>().unwrap().catalog_index();
        assert_eq!(0, idx("AA"));
        assert_eq!(12, idx("22"));
        assert_eq!(13, idx("AKs"));
        assert_eq!(25, idx("KQs"));
        assert_eq!(90, idx("32s"));
        assert_eq!(91, idx("AKo"));
        assert_eq!(168, idx("32o"));
    }

    #[test]
    fn test_round_trip_all() {
        for hand in StartingHand::all() {
            let label = hand.to_string();
            assert_eq!(hand, label.parse::<StartingHand>().unwrap());
        }
    }

    #[test]
    fn test_parse_pair() {
        let hand: StartingHand = "TT".parse().unwrap();
        assert!(hand.is_pair());
        assert_eq!(Value::Ten, hand.high());
        assert_eq!(Value::Ten, hand.low());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(RangeTrainerError::TooFewChars), "A".parse::<StartingHand>());
        assert_eq!(Err(RangeTrainerError::TooFewChars), "".parse::<StartingHand>());
        assert_eq!(
            Err(RangeTrainerError::UnexpectedValueChar('a')),
            "aKs".parse::<StartingHand>()
        );
        assert_eq!(
            Err(RangeTrainerError::MissingSuitedness),
            "AK".parse::<StartingHand>()
        );
        assert_eq!(
            Err(RangeTrainerError::InvalidSuitedPairs),
            "AAs".parse::<StartingHand>()
        );
        assert_eq!(
            Err(RangeTrainerError::RankOrder {
                high: 'K',
                low: 'A'
            }),
            "KAs".parse::<StartingHand>()
        );
        assert_eq!(
            Err(RangeTrainerError::UnexpectedModifierChar('x')),
            "AKx".parse::<StartingHand>()
        );
        assert_eq!(
            Err(RangeTrainerError::UnparsedCharsRemaining),
            "AKss".parse::<StartingHand>()
        );
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Err(RangeTrainerError::PairValuesDiffer {
                high: 'A',
                low: 'K'
            }),
            StartingHand::new(Value::Ace, Value::King, HandCategory::Pair)
        );
        assert!(StartingHand::new(Value::Ace, Value::Ace, HandCategory::Suited).is_err());
        assert!(StartingHand::new(Value::King, Value::Ace, HandCategory::OffSuit).is_err());
        assert!(StartingHand::new(Value::Ace, Value::Ace, HandCategory::Pair).is_ok());
    }

    #[test]
    fn test_ordering_is_catalog_order() {
        let mut hands: Vec<StartingHand> = ["72o", "AKs", "22", "AA", "AKo"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        hands.sort();
        let labels: Vec<String> = hands.iter().map(|h| h.to_string()).collect();
        assert_eq!(vec!["AA", "22", "AKs", "AKo", "72o"], labels);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_label() {
        let hand: StartingHand = "QJo".parse().unwrap();
        assert_eq!("\"QJo\"", serde_json::to_string(&hand).unwrap());
        let back: StartingHand = serde_json::from_str("\"QJo\"").unwrap();
        assert_eq!(hand, back);
        assert!(serde_json::from_str::<StartingHand>("\"JQo\"").is_err());
    }
}
