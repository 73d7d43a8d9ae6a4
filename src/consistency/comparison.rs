use std::collections::HashSet;
use std::fmt;

use tracing::event;

#[cfg(feature = "serde")]
use crate::core::RangeTrainerError;

/// The result of comparing two collections of labels as sets.
///
/// Every label of either input lands in exactly one of the three lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardSetComparison {
    /// Labels in both inputs, in the order they first appear in A.
    pub intersection: Vec<String>,
    /// Labels only in A, in the order they first appear in A.
    pub only_in_a: Vec<String>,
    /// Labels only in B, in the order they first appear in B.
    pub only_in_b: Vec<String>,
    /// True when both inputs hold the same set of labels.
    pub consistent: bool,
}

impl CardSetComparison {
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// Number of distinct labels in A.
    pub fn len_a(&self) -> usize {
        self.intersection.len() + self.only_in_a.len()
    }

    /// Number of distinct labels in B.
    pub fn len_b(&self) -> usize {
        self.intersection.len() + self.only_in_b.len()
    }
}

impl fmt::Display for CardSetComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.consistent {
            write!(f, "consistent: {} in common", self.intersection.len())
        } else {
            write!(
                f,
                "inconsistent: {} in common, only in A: [{}], only in B: [{}]",
                self.intersection.len(),
                self.only_in_a.join(", "),
                self.only_in_b.join(", ")
            )
        }
    }
}

/// Compare two collections of labels as sets.
///
/// Duplicates inside an input don't matter and empty inputs are fine.
///
/// ```
/// use range_trainer::consistency::compare;
///
/// let result = compare(["AA", "KK"], ["AA", "JJ"]);
/// assert!(!result.consistent);
/// assert_eq!(vec!["AA"], result.intersection);
/// assert_eq!(vec!["KK"], result.only_in_a);
/// assert_eq!(vec!["JJ"], result.only_in_b);
/// ```
pub fn compare<A, B>(a: A, b: B) -> CardSetComparison
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let a = unique(a);
    let b = unique(b);
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let (intersection, only_in_a): (Vec<String>, Vec<String>) = a
        .iter()
        .cloned()
        .partition(|label| set_b.contains(label.as_str()));
    let only_in_b: Vec<String> = b
        .iter()
        .filter(|label| !set_a.contains(label.as_str()))
        .cloned()
        .collect();

    let consistent = only_in_a.is_empty() && only_in_b.is_empty();
    event!(
        tracing::Level::DEBUG,
        common = intersection.len(),
        only_in_a = only_in_a.len(),
        only_in_b = only_in_b.len(),
        consistent,
        "Compared label sets"
    );

    CardSetComparison {
        intersection,
        only_in_a,
        only_in_b,
        consistent,
    }
}

/// Compare two JSON values that must each be a flat array of strings.
///
/// Anything else is rejected rather than coerced.
///
/// ```
/// use range_trainer::consistency::compare_json;
/// use serde_json::json;
///
/// let result = compare_json(&json!(["AA", "KK"]), &json!(["KK", "AA"])).unwrap();
/// assert!(result.consistent);
///
/// assert!(compare_json(&json!(["AA", 7]), &json!([])).is_err());
/// ```
#[cfg(feature = "serde")]
pub fn compare_json(
    a: &serde_json::Value,
    b: &serde_json::Value,
) -> Result<CardSetComparison, RangeTrainerError> {
    Ok(compare(string_array("A", a)?, string_array("B", b)?))
}

#[cfg(feature = "serde")]
fn string_array<'a>(
    side: &str,
    value: &'a serde_json::Value,
) -> Result<Vec<&'a str>, RangeTrainerError> {
    let items = value.as_array().ok_or_else(|| {
        RangeTrainerError::InvalidInput(format!("{side} must be an array of strings, got {value}"))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().ok_or_else(|| {
                RangeTrainerError::InvalidInput(format!("{side}[{i}] is not a string: {item}"))
            })
        })
        .collect()
}

/// Drop repeats, keeping the first occurrence of each label.
fn unique<I>(labels: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter_map(|label| {
            let label = label.as_ref();
            seen.insert(label.to_string()).then(|| label.to_string())
        })
        .collect()
}
