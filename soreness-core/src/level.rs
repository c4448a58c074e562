use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("Soreness level {0} is out of range (0-5)")]
    OutOfRange(i64),
}

/// A soreness rating from 0 (none) to 5 (severe).
///
/// The range is enforced at construction, so every value of this type is valid.
/// Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct SorenessLevel(u8);

/// Coarse grouping of levels, used for colouring and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    Moderate,
    High,
}

impl SorenessLevel {
    pub const MAX: u8 = 5;
    pub const NONE: SorenessLevel = SorenessLevel(0);
    pub const VERY_MILD: SorenessLevel = SorenessLevel(1);
    pub const SEVERE: SorenessLevel = SorenessLevel(Self::MAX);

    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value > Self::MAX {
            return Err(LevelError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = SorenessLevel> {
        (0..=Self::MAX).map(SorenessLevel)
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "None",
            1 => "Very Mild",
            2 => "Mild",
            3 => "Moderate",
            4 => "Significant",
            _ => "Severe",
        }
    }

    pub fn severity(&self) -> Severity {
        match self.0 {
            0 => Severity::None,
            1 | 2 => Severity::Low,
            3 => Severity::Moderate,
            _ => Severity::High,
        }
    }
}

impl TryFrom<u8> for SorenessLevel {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for SorenessLevel {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| LevelError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<SorenessLevel> for u8 {
    fn from(level: SorenessLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SorenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_through_five() {
        let values: Vec<u8> = SorenessLevel::all().map(|l| l.value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(SorenessLevel::new(6), Err(LevelError::OutOfRange(6)));
        assert_eq!(SorenessLevel::try_from(-1i64), Err(LevelError::OutOfRange(-1)));
    }

    #[test]
    fn test_labels_bracket_the_scale() {
        assert_eq!(SorenessLevel::NONE.label(), "None");
        assert_eq!(SorenessLevel::SEVERE.label(), "Severe");
        assert_eq!(SorenessLevel::SEVERE.severity(), Severity::High);
    }

    #[test]
    fn test_serde_as_integer() {
        let level: SorenessLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level.value(), 3);
        assert_eq!(serde_json::to_string(&level).unwrap(), "3");
        assert!(serde_json::from_str::<SorenessLevel>("9").is_err());
    }
}
