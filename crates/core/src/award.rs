//! The four EGOT award types and the classifier that maps free-text
//! award labels onto them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four awards that make up an EGOT.
///
/// Variant order is alphabetical, which is also the E-G-O-T order, so sorting
/// by the enum and sorting by the stored name agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AwardType {
    Emmy,
    Grammy,
    Oscar,
    Tony,
}

/// Every award type, in E-G-O-T order.
pub const ALL_AWARD_TYPES: [AwardType; 4] = [
    AwardType::Emmy,
    AwardType::Grammy,
    AwardType::Oscar,
    AwardType::Tony,
];

impl AwardType {
    /// The name stored in the `awards.type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            AwardType::Emmy => "Emmy",
            AwardType::Grammy => "Grammy",
            AwardType::Oscar => "Oscar",
            AwardType::Tony => "Tony",
        }
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored award type is not one of the four known names.
#[derive(Debug, thiserror::Error)]
#[error("unknown award type '{0}'")]
pub struct UnknownAwardType(pub String);

impl FromStr for AwardType {
    type Err = UnknownAwardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_AWARD_TYPES
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownAwardType(s.to_string()))
    }
}

impl TryFrom<String> for AwardType {
    type Error = UnknownAwardType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keyword rules checked in order; the first rule with a matching keyword wins.
const RULES: &[(&[&str], AwardType)] = &[
    (&["emmy"], AwardType::Emmy),
    (&["grammy"], AwardType::Grammy),
    (&["academy award", "oscar"], AwardType::Oscar),
    (&["tony"], AwardType::Tony),
];

/// Classify a free-text award label.
///
/// Matching is case-insensitive substring containment. Rules are checked in
/// the order Emmy, Grammy, Oscar, Tony, so a label that mentions several
/// awards resolves to the earliest of them. Returns `None` for labels that
/// are not EGOT awards.
///
/// # Examples
///
/// ```
/// use egot_core::award::{classify_award, AwardType};
///
/// assert_eq!(classify_award("Academy Award for Best Actress"), Some(AwardType::Oscar));
/// assert_eq!(classify_award("Golden Globe Award"), None);
/// ```
pub fn classify_award(label: &str) -> Option<AwardType> {
    let label = label.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| label.contains(k)))
        .map(|(_, award_type)| *award_type)
}
