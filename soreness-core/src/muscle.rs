use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a catalog identifier from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown muscle group '{0}'")]
    UnknownMuscle(String),

    #[error("Unknown body zone '{0}'")]
    UnknownZone(String),
}

/// An atomic anatomical area a user can mark as sore.
///
/// The catalog is fixed. `FullBody` is the identifier used when logging general
/// soreness and is not a member of any [`BodyZone`](crate::BodyZone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    LowerBack,
    UpperBack,
    Lats,
    Traps,
    Neck,
    Glutes,
    Quadriceps,
    Hamstrings,
    Calves,
    HipFlexors,
    Adductors,
    FullBody,
}

impl MuscleGroup {
    /// Every identifier in catalog order.
    pub const ALL: [MuscleGroup; 19] = [
        Self::Chest,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Abs,
        Self::Obliques,
        Self::LowerBack,
        Self::UpperBack,
        Self::Lats,
        Self::Traps,
        Self::Neck,
        Self::Glutes,
        Self::Quadriceps,
        Self::Hamstrings,
        Self::Calves,
        Self::HipFlexors,
        Self::Adductors,
        Self::FullBody,
    ];

    /// Wire identifier, as sent in `body_part`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Abs => "abs",
            Self::Obliques => "obliques",
            Self::LowerBack => "lower_back",
            Self::UpperBack => "upper_back",
            Self::Lats => "lats",
            Self::Traps => "traps",
            Self::Neck => "neck",
            Self::Glutes => "glutes",
            Self::Quadriceps => "quadriceps",
            Self::Hamstrings => "hamstrings",
            Self::Calves => "calves",
            Self::HipFlexors => "hip_flexors",
            Self::Adductors => "adductors",
            Self::FullBody => "full_body",
        }
    }

    /// Human readable name for views.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Forearms => "Forearms",
            Self::Abs => "Abs",
            Self::Obliques => "Obliques",
            Self::LowerBack => "Lower Back",
            Self::UpperBack => "Upper Back",
            Self::Lats => "Lats",
            Self::Traps => "Traps",
            Self::Neck => "Neck",
            Self::Glutes => "Glutes",
            Self::Quadriceps => "Quadriceps",
            Self::Hamstrings => "Hamstrings",
            Self::Calves => "Calves",
            Self::HipFlexors => "Hip Flexors",
            Self::Adductors => "Adductors",
            Self::FullBody => "Full Body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = ParseError;

    /// Accepts the wire id as well as kebab-case and spaced spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownMuscle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nineteen_unique_ids() {
        let mut ids: Vec<&str> = MuscleGroup::ALL.iter().map(|m| m.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 19);
    }

    #[test]
    fn test_parse_accepts_alternate_spellings() {
        assert_eq!("hip-flexors".parse::<MuscleGroup>(), Ok(MuscleGroup::HipFlexors));
        assert_eq!("Lower Back".parse::<MuscleGroup>(), Ok(MuscleGroup::LowerBack));
        assert_eq!("full_body".parse::<MuscleGroup>(), Ok(MuscleGroup::FullBody));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "wings".parse::<MuscleGroup>(),
            Err(ParseError::UnknownMuscle("wings".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_wire_id() {
        let json = serde_json::to_string(&MuscleGroup::UpperBack).unwrap();
        assert_eq!(json, "\"upper_back\"");
    }
}
