//! Set comparison for cross checking two independently computed
//! collections of hands, like the due cards of a study session
//! against the hands a weighted selection picked.

mod comparison;
pub use self::comparison::{CardSetComparison, compare};

#[cfg(feature = "serde")]
pub use self::comparison::compare_json;
