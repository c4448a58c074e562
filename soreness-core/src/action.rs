use crate::level::SorenessLevel;
use crate::muscle::MuscleGroup;
use crate::zone::{BodyZone, Side};

/// A user input event against a [`SelectionSession`](crate::SelectionSession).
///
/// Views emit these instead of mutating the session, so every change goes
/// through [`SelectionSession::apply`](crate::SelectionSession::apply) in the
/// order the user issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleMuscle(MuscleGroup),
    ToggleFullBody,
    ToggleSide(Side),
    SetSideLevel(Side, SorenessLevel),
    SetRegionLevel(BodyZone, SorenessLevel),
    SetMuscleLevel(MuscleGroup, SorenessLevel),
    SetFullBodyLevel(SorenessLevel),
    RemoveMuscle(MuscleGroup),
    ClearAll,
}
