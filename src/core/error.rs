use thiserror::Error;

/// This is the core error type for the
/// range trainer library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeTrainerError {
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unexpected modifier '{0}' after the ranks")]
    UnexpectedModifierChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Non-pair hands need an 's' or 'o' suffix")]
    MissingSuitedness,
    #[error("Pairs can't be suited or offsuit.")]
    InvalidSuitedPairs,
    #[error("A pair needs both values equal, got {high} and {low}")]
    PairValuesDiffer { high: char, low: char },
    #[error("The higher rank must come first, got {high} before {low}")]
    RankOrder { high: char, low: char },
    #[error("Invalid use of the plus modifier")]
    InvalidPlusModifier,
    #[error("Hand catalog failed verification: {0}")]
    DataIntegrity(#[from] CatalogIntegrityError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// The ways a starting hand catalog can be wrong.
/// Any of these means the catalog can't be trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogIntegrityError {
    #[error("expected {expected} hands, found {found}")]
    Size { expected: usize, found: usize },
    #[error("label {label:?} at index {index} is not a starting hand")]
    UnparsableLabel {
        index: usize,
        label: String,
        #[source]
        source: Box<RangeTrainerError>,
    },
    #[error("label {label} appears more than once")]
    DuplicateLabel { label: String },
    #[error("expected {expected} {partition} hands, found {found}")]
    PartitionSize {
        partition: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("index {index} should be {expected} but is {found}")]
    OutOfOrder {
        index: usize,
        expected: String,
        found: String,
    },
}
