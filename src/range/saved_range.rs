use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::RangeStoreError;
use crate::holdem::{HandCatalog, StartingHand};

/// How often a hand raises, calls and folds at one spot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionFrequencies {
    pub raise: f64,
    pub call: f64,
    pub fold: f64,
}

impl ActionFrequencies {
    pub fn new(raise: f64, call: f64, fold: f64) -> Self {
        Self { raise, call, fold }
    }

    /// A hand that is always folded.
    pub fn always_fold() -> Self {
        Self::new(0.0, 0.0, 100.0)
    }

    /// Every frequency has to be a finite, non negative number.
    pub fn validate(&self, hand: StartingHand) -> Result<(), RangeStoreError> {
        for (action, value) in [("raise", self.raise), ("call", self.call), ("fold", self.fold)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RangeStoreError::InvalidFrequency {
                    hand,
                    action,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// One saved range: the spot it's for and what every listed hand does.
///
/// Serializes as
/// `{"positionCombo": "BTN_vs_BB", "hands": {"AA": {"raise": 100.0, ...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRange {
    pub position_combo: String,
    #[serde(deserialize_with = "unique_hands")]
    pub hands: BTreeMap<StartingHand, ActionFrequencies>,
}

/// Read the hands map, failing on a hand listed twice instead of
/// silently keeping the last one.
fn unique_hands<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<StartingHand, ActionFrequencies>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueHands;

    impl<'de> Visitor<'de> for UniqueHands {
        type Value = BTreeMap<StartingHand, ActionFrequencies>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from starting hand labels to action frequencies")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut hands = BTreeMap::new();
            while let Some((hand, frequencies)) =
                map.next_entry::<StartingHand, ActionFrequencies>()?
            {
                if hands.insert(hand, frequencies).is_some() {
                    return Err(serde::de::Error::custom(format!(
                        "hand {hand} is listed more than once"
                    )));
                }
            }
            Ok(hands)
        }
    }

    deserializer.deserialize_map(UniqueHands)
}

impl SavedRange {
    pub fn new(position_combo: impl Into<String>) -> Self {
        Self {
            position_combo: position_combo.into(),
            hands: BTreeMap::new(),
        }
    }

    /// Set the frequencies of one hand, replacing what was there.
    pub fn with_hand(mut self, hand: StartingHand, frequencies: ActionFrequencies) -> Self {
        self.hands.insert(hand, frequencies);
        self
    }

    pub fn validate(&self) -> Result<(), RangeStoreError> {
        self.hands
            .iter()
            .try_for_each(|(hand, freq)| freq.validate(*hand))
    }

    /// Catalog hands this range says nothing about.
    pub fn missing_hands(&self, catalog: &HandCatalog) -> Vec<StartingHand> {
        catalog.missing(self.hands.keys())
    }

    /// Does this range cover every starting hand?
    pub fn is_complete(&self, catalog: &HandCatalog) -> bool {
        self.missing_hands(catalog).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hand(label: &str) -> StartingHand {
        label.parse().unwrap()
    }

    #[test]
    fn test_json_shape() {
        let range = SavedRange::new("UTG_vs_BB")
            .with_hand(hand("AA"), ActionFrequencies::new(100.0, 0.0, 0.0))
            .with_hand(hand("72o"), ActionFrequencies::always_fold());

        let value = serde_json::to_value(&range).unwrap();
        assert_eq!(
            json!({
                "positionCombo": "UTG_vs_BB",
                "hands": {
                    "AA": {"raise": 100.0, "call": 0.0, "fold": 0.0},
                    "72o": {"raise": 0.0, "call": 0.0, "fold": 100.0}
                }
            }),
            value
        );

        let back: SavedRange = serde_json::from_value(value).unwrap();
        assert_eq!(range, back);
    }

    #[test]
    fn test_unknown_hand_key_rejected() {
        let value = json!({
            "positionCombo": "CO",
            "hands": {"AX": {"raise": 1.0, "call": 0.0, "fold": 0.0}}
        });
        assert!(serde_json::from_value::<SavedRange>(value).is_err());
    }

    #[test]
    fn test_duplicate_hand_key_rejected() {
        let text = r#"{
            "positionCombo": "CO",
            "hands": {
                "AA": {"raise": 100.0, "call": 0.0, "fold": 0.0},
                "AA": {"raise": 0.0, "call": 0.0, "fold": 100.0}
            }
        }"#;
        let err = serde_json::from_str::<SavedRange>(text).unwrap_err();
        assert!(err.to_string().contains("AA is listed more than once"), "{}", err);
    }

    #[test]
    fn test_validate() {
        let good = SavedRange::new("CO")
            .with_hand(hand("KQs"), ActionFrequencies::new(50.0, 25.0, 25.0));
        assert!(good.validate().is_ok());

        let bad = SavedRange::new("CO")
            .with_hand(hand("KQs"), ActionFrequencies::new(-1.0, 0.0, 0.0));
        assert!(matches!(
            bad.validate(),
            Err(RangeStoreError::InvalidFrequency { action: "raise", .. })
        ));

        let nan = SavedRange::new("CO")
            .with_hand(hand("KQs"), ActionFrequencies::new(0.0, f64::NAN, 0.0));
        assert!(matches!(
            nan.validate(),
            Err(RangeStoreError::InvalidFrequency { action: "call", .. })
        ));
    }

    #[test]
    fn test_completeness() {
        let catalog = HandCatalog::global();
        let mut range = SavedRange::new("BTN");
        for h in catalog.iter().skip(2) {
            range.hands.insert(*h, ActionFrequencies::always_fold());
        }
        assert!(!range.is_complete(catalog));
        let missing: Vec<String> = range
            .missing_hands(catalog)
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(vec!["AA", "KK"], missing);

        range.hands.insert(hand("AA"), ActionFrequencies::always_fold());
        range.hands.insert(hand("KK"), ActionFrequencies::always_fold());
        assert!(range.is_complete(catalog));
    }
}
