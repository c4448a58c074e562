//! Command-line action grammar for building a soreness entry.
//!
//! Actions are applied in the order given:
//!
//! | token | effect |
//! |---|---|
//! | `all` | toggle every muscle |
//! | `all=N` | set the full-body default level |
//! | `front`, `back` | toggle a side |
//! | `front=N`, `back=N` | set a side level |
//! | `region:<zone>=N` | set a region level (`region:anterior-upper=3`) |
//! | `<muscle>` | toggle a muscle |
//! | `<muscle>=N` | select if needed, then pin the muscle's level |
//! | `rm:<muscle>` | remove a muscle |
//! | `clear` | clear the entry |

use std::str::FromStr;

use soreness_core::{LevelError, ParseError};
use thiserror::Error;

use crate::models::{Action, BodyZone, MuscleGroup, SelectionSession, SessionError, Side, SorenessLevel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("Empty action")]
    Empty,

    #[error("Invalid level '{0}': expected a number from 0 to 5")]
    InvalidLevel(String),

    #[error("Region action '{0}' needs a level, e.g. region:core=3")]
    MissingRegionLevel(String),

    #[error(transparent)]
    Unknown(#[from] ParseError),

    #[error(transparent)]
    Level(#[from] LevelError),
}

/// One parsed command-line action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Maps directly onto a session operation.
    Session(Action),
    /// Pin a muscle's level, selecting it first when needed.
    PinMuscle(MuscleGroup, SorenessLevel),
}

impl CliAction {
    /// The user gestures this action stands for, given the current session.
    pub fn to_actions(self, session: &SelectionSession) -> Vec<Action> {
        match self {
            Self::Session(action) => vec![action],
            Self::PinMuscle(muscle, level) if session.is_selected(muscle) => {
                vec![Action::SetMuscleLevel(muscle, level)]
            }
            Self::PinMuscle(muscle, level) => vec![
                Action::ToggleMuscle(muscle),
                Action::SetMuscleLevel(muscle, level),
            ],
        }
    }

    pub fn apply_to(self, session: &mut SelectionSession) -> Result<(), SessionError> {
        for action in self.to_actions(session) {
            session.apply(action)?;
        }
        Ok(())
    }
}

fn parse_level(raw: &str) -> Result<SorenessLevel, ActionParseError> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| ActionParseError::InvalidLevel(raw.to_string()))?;
    Ok(SorenessLevel::new(value)?)
}

impl FromStr for CliAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ActionParseError::Empty);
        }

        if let Some(rest) = token.strip_prefix("region:") {
            let (zone, level) = rest
                .split_once('=')
                .ok_or_else(|| ActionParseError::MissingRegionLevel(token.to_string()))?;
            let zone: BodyZone = zone.parse()?;
            return Ok(Self::Session(Action::SetRegionLevel(zone, parse_level(level)?)));
        }

        if let Some(muscle) = token.strip_prefix("rm:") {
            return Ok(Self::Session(Action::RemoveMuscle(muscle.parse()?)));
        }

        let (name, level) = match token.split_once('=') {
            Some((name, level)) => (name, Some(parse_level(level)?)),
            None => (token, None),
        };

        let action = match (name.to_lowercase().as_str(), level) {
            ("clear", None) => Self::Session(Action::ClearAll),
            ("all", None) => Self::Session(Action::ToggleFullBody),
            ("all", Some(level)) => Self::Session(Action::SetFullBodyLevel(level)),
            ("front", None) => Self::Session(Action::ToggleSide(Side::Front)),
            ("front", Some(level)) => Self::Session(Action::SetSideLevel(Side::Front, level)),
            ("back", None) => Self::Session(Action::ToggleSide(Side::Back)),
            ("back", Some(level)) => Self::Session(Action::SetSideLevel(Side::Back, level)),
            (_, None) => Self::Session(Action::ToggleMuscle(name.parse()?)),
            (_, Some(level)) => Self::PinMuscle(name.parse()?, level),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> SorenessLevel {
        SorenessLevel::new(value).unwrap()
    }

    fn parse(token: &str) -> CliAction {
        token.parse().expect("valid action")
    }

    #[test]
    fn test_parses_scoped_actions() {
        assert_eq!(parse("all"), CliAction::Session(Action::ToggleFullBody));
        assert_eq!(parse("all=2"), CliAction::Session(Action::SetFullBodyLevel(level(2))));
        assert_eq!(parse("front"), CliAction::Session(Action::ToggleSide(Side::Front)));
        assert_eq!(
            parse("back=4"),
            CliAction::Session(Action::SetSideLevel(Side::Back, level(4)))
        );
        assert_eq!(
            parse("region:anterior-upper=3"),
            CliAction::Session(Action::SetRegionLevel(BodyZone::AnteriorUpper, level(3)))
        );
        assert_eq!(parse("clear"), CliAction::Session(Action::ClearAll));
    }

    #[test]
    fn test_parses_muscle_actions() {
        assert_eq!(
            parse("hip-flexors"),
            CliAction::Session(Action::ToggleMuscle(MuscleGroup::HipFlexors))
        );
        assert_eq!(
            parse("rm:chest"),
            CliAction::Session(Action::RemoveMuscle(MuscleGroup::Chest))
        );
        assert_eq!(parse("chest=5"), CliAction::PinMuscle(MuscleGroup::Chest, level(5)));
        assert_eq!(
            parse("full_body"),
            CliAction::Session(Action::ToggleMuscle(MuscleGroup::FullBody))
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!("".parse::<CliAction>(), Err(ActionParseError::Empty));
        assert_eq!(
            "chest=x".parse::<CliAction>(),
            Err(ActionParseError::InvalidLevel("x".to_string()))
        );
        assert_eq!(
            "chest=9".parse::<CliAction>(),
            Err(ActionParseError::Level(LevelError::OutOfRange(9)))
        );
        assert_eq!(
            "region:core".parse::<CliAction>(),
            Err(ActionParseError::MissingRegionLevel("region:core".to_string()))
        );
        assert!(matches!(
            "wings".parse::<CliAction>(),
            Err(ActionParseError::Unknown(ParseError::UnknownMuscle(_)))
        ));
    }

    #[test]
    fn test_pin_selects_then_sets_manual() {
        let mut session = SelectionSession::new();
        parse("calves=4").apply_to(&mut session).unwrap();
        parse("back=1").apply_to(&mut session).unwrap();

        assert_eq!(session.soreness_level(MuscleGroup::Calves), Some(level(4)));
        assert_eq!(
            session.provenance(MuscleGroup::Calves),
            Some(crate::models::OverrideProvenance::Manual)
        );
    }

    #[test]
    fn test_pin_keeps_an_already_selected_muscle() {
        let mut session = SelectionSession::new();
        parse("chest").apply_to(&mut session).unwrap();
        parse("chest=3").apply_to(&mut session).unwrap();

        assert!(session.is_selected(MuscleGroup::Chest));
        assert_eq!(session.soreness_level(MuscleGroup::Chest), Some(level(3)));
    }
}
