use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::muscle::{MuscleGroup, ParseError};
use MuscleGroup::*;

const SHOULDER: &[MuscleGroup] = &[Shoulders, Traps, Neck];
const ANTERIOR_UPPER: &[MuscleGroup] = &[Chest, Biceps, Forearms];
const POSTERIOR_UPPER: &[MuscleGroup] = &[UpperBack, Lats, Triceps];
const CORE: &[MuscleGroup] = &[Abs, Obliques, LowerBack];
const ANTERIOR_LOWER: &[MuscleGroup] = &[Quadriceps, HipFlexors, Adductors];
const POSTERIOR_LOWER: &[MuscleGroup] = &[Glutes, Hamstrings, Calves];

const FRONT: &[MuscleGroup] = &[
    Chest, Shoulders, Biceps, Forearms, Abs, Obliques, Quadriceps, HipFlexors, Adductors, Neck,
];
const BACK: &[MuscleGroup] = &[
    Traps, UpperBack, Lats, Triceps, LowerBack, Glutes, Hamstrings, Calves,
];

const UPPER_BODY: &[MuscleGroup] = &[
    Shoulders, Traps, Neck, Chest, Biceps, Forearms, UpperBack, Lats, Triceps,
];
const LOWER_BODY: &[MuscleGroup] = &[
    Quadriceps, HipFlexors, Adductors, Glutes, Hamstrings, Calves,
];
const FULL_BODY: &[MuscleGroup] = &[
    Chest, Shoulders, Biceps, Triceps, Forearms, Abs, Obliques, LowerBack, UpperBack, Lats, Traps,
    Neck, Glutes, Quadriceps, Hamstrings, Calves, HipFlexors, Adductors,
];

/// A named grouping of muscles.
///
/// Zones overlap: `chest` is in both `front` and `anterior upper`. The six
/// [`REGIONS`](Self::REGIONS) are the exception, they partition the anatomical
/// muscles so every muscle except `full_body` has exactly one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyZone {
    #[serde(rename = "front")]
    Front,
    #[serde(rename = "back")]
    Back,
    #[serde(rename = "shoulder")]
    Shoulder,
    #[serde(rename = "core")]
    Core,
    #[serde(rename = "anterior upper")]
    AnteriorUpper,
    #[serde(rename = "posterior upper")]
    PosteriorUpper,
    #[serde(rename = "anterior lower")]
    AnteriorLower,
    #[serde(rename = "posterior lower")]
    PosteriorLower,
    #[serde(rename = "upper body")]
    UpperBody,
    #[serde(rename = "lower body")]
    LowerBody,
    #[serde(rename = "full body")]
    FullBody,
}

impl BodyZone {
    pub const ALL: [BodyZone; 11] = [
        Self::Front,
        Self::Back,
        Self::Shoulder,
        Self::Core,
        Self::AnteriorUpper,
        Self::PosteriorUpper,
        Self::AnteriorLower,
        Self::PosteriorLower,
        Self::UpperBody,
        Self::LowerBody,
        Self::FullBody,
    ];

    /// The mutually exclusive anatomical regions, in display order.
    pub const REGIONS: [BodyZone; 6] = [
        Self::Shoulder,
        Self::AnteriorUpper,
        Self::PosteriorUpper,
        Self::Core,
        Self::AnteriorLower,
        Self::PosteriorLower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Shoulder => "shoulder",
            Self::Core => "core",
            Self::AnteriorUpper => "anterior upper",
            Self::PosteriorUpper => "posterior upper",
            Self::AnteriorLower => "anterior lower",
            Self::PosteriorLower => "posterior lower",
            Self::UpperBody => "upper body",
            Self::LowerBody => "lower body",
            Self::FullBody => "full body",
        }
    }

    /// The muscles in this zone. Never empty.
    pub fn muscles(&self) -> &'static [MuscleGroup] {
        match self {
            Self::Front => FRONT,
            Self::Back => BACK,
            Self::Shoulder => SHOULDER,
            Self::Core => CORE,
            Self::AnteriorUpper => ANTERIOR_UPPER,
            Self::PosteriorUpper => POSTERIOR_UPPER,
            Self::AnteriorLower => ANTERIOR_LOWER,
            Self::PosteriorLower => POSTERIOR_LOWER,
            Self::UpperBody => UPPER_BODY,
            Self::LowerBody => LOWER_BODY,
            Self::FullBody => FULL_BODY,
        }
    }

    pub fn contains(&self, muscle: MuscleGroup) -> bool {
        self.muscles().contains(&muscle)
    }

    pub fn is_region(&self) -> bool {
        Self::REGIONS.contains(self)
    }

    /// The anatomical region enclosing `muscle`, if any.
    pub fn region_of(muscle: MuscleGroup) -> Option<BodyZone> {
        match muscle {
            Shoulders | Traps | Neck => Some(Self::Shoulder),
            Chest | Biceps | Forearms => Some(Self::AnteriorUpper),
            UpperBack | Lats | Triceps => Some(Self::PosteriorUpper),
            Abs | Obliques | LowerBack => Some(Self::Core),
            Quadriceps | HipFlexors | Adductors => Some(Self::AnteriorLower),
            Glutes | Hamstrings | Calves => Some(Self::PosteriorLower),
            MuscleGroup::FullBody => None,
        }
    }
}

impl fmt::Display for BodyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyZone {
    type Err = ParseError;

    /// Accepts `anterior upper`, `anterior-upper` and `anterior_upper`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|z| z.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownZone(s.to_string()))
    }
}

/// One side of the body, toggled or levelled as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub fn zone(&self) -> BodyZone {
        match self {
            Self::Front => BodyZone::Front,
            Self::Back => BodyZone::Back,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.zone().as_str()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_zone_is_non_empty() {
        for zone in BodyZone::ALL {
            assert!(!zone.muscles().is_empty(), "{} is empty", zone);
        }
    }

    #[test]
    fn test_regions_partition_full_body() {
        for muscle in BodyZone::FullBody.muscles() {
            let owners: Vec<_> = BodyZone::REGIONS
                .iter()
                .filter(|r| r.contains(*muscle))
                .collect();
            assert_eq!(owners.len(), 1, "{} has {} regions", muscle, owners.len());
            assert_eq!(BodyZone::region_of(*muscle), Some(*owners[0]));
        }
        let region_total: usize = BodyZone::REGIONS.iter().map(|r| r.muscles().len()).sum();
        assert_eq!(region_total, BodyZone::FullBody.muscles().len());
    }

    #[test]
    fn test_sides_split_full_body() {
        for muscle in BodyZone::FullBody.muscles() {
            assert!(BodyZone::Front.contains(*muscle) ^ BodyZone::Back.contains(*muscle));
        }
    }

    #[test]
    fn test_full_body_id_has_no_region() {
        assert_eq!(BodyZone::region_of(MuscleGroup::FullBody), None);
        assert!(!BodyZone::FullBody.contains(MuscleGroup::FullBody));
    }

    #[test]
    fn test_upper_and_lower_body_compose_regions() {
        for muscle in BodyZone::UpperBody.muscles() {
            let region = BodyZone::region_of(*muscle).unwrap();
            assert!(matches!(
                region,
                BodyZone::Shoulder | BodyZone::AnteriorUpper | BodyZone::PosteriorUpper
            ));
        }
        for muscle in BodyZone::LowerBody.muscles() {
            let region = BodyZone::region_of(*muscle).unwrap();
            assert!(matches!(
                region,
                BodyZone::AnteriorLower | BodyZone::PosteriorLower
            ));
        }
    }

    #[test]
    fn test_parse_zone_spellings() {
        assert_eq!("anterior-upper".parse::<BodyZone>(), Ok(BodyZone::AnteriorUpper));
        assert_eq!("posterior_lower".parse::<BodyZone>(), Ok(BodyZone::PosteriorLower));
        assert_eq!("Core".parse::<BodyZone>(), Ok(BodyZone::Core));
        assert!("elbow".parse::<BodyZone>().is_err());
    }
}
