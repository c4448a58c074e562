//! Summary of the muscles in the current entry.

use super::{provenance_tag, NAME_WIDTH};
use crate::models::{Action, MuscleGroup, SelectionSession, SorenessLevel};

const EMPTY: &str = "No muscles selected\n";

/// One row per selected muscle, in selection order.
///
/// Example output:
/// ```text
/// Chest        5 Severe (manual)
/// Quadriceps   1 Very Mild (full-body)
/// ```
pub fn render(session: &SelectionSession) -> String {
    if session.is_empty() {
        return EMPTY.to_string();
    }

    let mut output = String::new();
    for entry in session.entries() {
        output.push_str(&format!(
            "{:<width$} {} {}",
            entry.muscle.display_name(),
            entry.level,
            entry.level.label(),
            width = NAME_WIDTH
        ));
        let tag = provenance_tag(entry.provenance);
        if !tag.is_empty() {
            output.push_str(&format!(" ({})", tag));
        }
        output.push('\n');
    }
    if let Some(rpe) = session.rpe() {
        output.push_str(&format!("RPE: {}\n", rpe));
    }
    if let Some(notes) = session.notes() {
        output.push_str(&format!("Notes: {}\n", notes));
    }
    output
}

/// Changing a row's level pins that muscle.
pub fn on_level_change(muscle: MuscleGroup, level: SorenessLevel) -> Action {
    Action::SetMuscleLevel(muscle, level)
}

pub fn on_remove(muscle: MuscleGroup) -> Action {
    Action::RemoveMuscle(muscle)
}
