use std::collections::HashSet;
use std::str::Chars;

use super::{HandCategory, StartingHand};
use crate::core::{RangeTrainerError, Value};

/// Things that can follow the two values in range notation.
#[derive(Debug)]
enum Modifier {
    Plus,
    Suited,
    Offsuit,
}

impl Modifier {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            's' => Some(Self::Suited),
            'o' => Some(Self::Offsuit),
            _ => None,
        }
    }
}

/// Parser for the usual shorthand used to write down ranges.
///
/// ```
/// use range_trainer::holdem::RangeParser;
///
/// let hands = RangeParser::parse("QQ+, AKs").unwrap();
/// let labels: Vec<String> = hands.iter().map(|h| h.to_string()).collect();
/// assert_eq!(vec!["AA", "KK", "QQ", "AKs"], labels);
/// ```
pub struct RangeParser;

impl RangeParser {
    /// Parse a comma separated list of range items.
    ///
    /// Empty items are skipped. A hand that more than one item covers is
    /// only returned once, where it first appeared.
    pub fn parse(range_str: &str) -> Result<Vec<StartingHand>, RangeTrainerError> {
        let mut seen = HashSet::new();
        let mut hands = vec![];
        for item in range_str.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            for hand in Self::parse_one(item)? {
                if seen.insert(hand) {
                    hands.push(hand);
                }
            }
        }
        Ok(hands)
    }

    /// Parse a single range item and return all the starting hands it
    /// covers in catalog order.
    ///
    /// - `AA`, `AKs`, `AKo` are single hands.
    /// - `AK` is both the suited and offsuit hand.
    /// - `QQ+` is every pair from queens up.
    /// - `ATs+` is every suited ace from ace ten up to ace king.
    pub fn parse_one(range_str: &str) -> Result<Vec<StartingHand>, RangeTrainerError> {
        let mut iter = range_str.chars();
        let first = Self::create_value(&mut iter)?;
        let second = Self::create_value(&mut iter)?;

        let mut category = None;
        let mut plus = false;
        for c in iter {
            match Modifier::from_char(c) {
                Some(Modifier::Plus) if plus => return Err(RangeTrainerError::InvalidPlusModifier),
                Some(Modifier::Plus) => plus = true,
                // Suitedness has to come before the plus.
                Some(_) if plus || category.is_some() => {
                    return Err(RangeTrainerError::UnparsedCharsRemaining);
                }
                Some(Modifier::Suited) => category = Some(HandCategory::Suited),
                Some(Modifier::Offsuit) => category = Some(HandCategory::OffSuit),
                None => return Err(RangeTrainerError::UnexpectedModifierChar(c)),
            }
        }

        let mut hands: Vec<StartingHand> = if first == second {
            if category.is_some() {
                return Err(RangeTrainerError::InvalidSuitedPairs);
            }
            let top = if plus { Value::Ace } else { first };
            Self::values_between(first, top)
                .into_iter()
                .map(StartingHand::pair)
                .collect()
        } else {
            let categories = match category {
                Some(c) => vec![c],
                None => vec![HandCategory::Suited, HandCategory::OffSuit],
            };
            // With a plus the kicker climbs until it's one below the high card.
            let top = if plus { second.max(Self::below(first)) } else { second };
            let mut hands = vec![];
            for kicker in Self::values_between(second, top) {
                for c in &categories {
                    hands.push(StartingHand::new(first, kicker, *c)?);
                }
            }
            hands
        };
        hands.sort();
        Ok(hands)
    }

    /// Take the next char and bring out a Value.
    fn create_value(chars: &mut Chars) -> Result<Value, RangeTrainerError> {
        let c = chars.next().ok_or(RangeTrainerError::TooFewChars)?;
        Value::try_from(c)
    }

    /// Inclusive run of values from `start` up to `end`.
    fn values_between(start: Value, end: Value) -> Vec<Value> {
        let mut values = vec![];
        let mut cur = Some(start);
        while let Some(v) = cur.filter(|v| *v <= end) {
            values.push(v);
            cur = v.next_higher();
        }
        values
    }

    /// The value just below `v`, or `v` itself for a two.
    fn below(v: Value) -> Value {
        Value::from_u8((v as u8).saturating_sub(1)).unwrap_or(v)
    }
}
