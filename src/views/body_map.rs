//! Clickable body diagram, rendered as front and back columns.

use super::{level_cell, title, NAME_WIDTH, SELECTED, UNSELECTED};
use crate::models::{Action, MuscleGroup, SelectionSession, Side};

/// Render both sides of the body with selection markers.
///
/// Example output:
/// ```text
/// Front [4]
///   ● Chest        4
///   ○ Shoulders
/// Back [-]
///   ○ Traps
/// ```
pub fn render(session: &SelectionSession) -> String {
    let mut output = String::new();
    if session.is_selected(MuscleGroup::FullBody) {
        render_muscle(&mut output, session, MuscleGroup::FullBody);
    }
    for side in [Side::Front, Side::Back] {
        output.push_str(&format!(
            "{} [{}]\n",
            title(side.as_str()),
            level_cell(session.side_level(side))
        ));
        for muscle in side.zone().muscles() {
            output.push_str("  ");
            render_muscle(&mut output, session, *muscle);
        }
    }
    output
}

fn render_muscle(output: &mut String, session: &SelectionSession, muscle: MuscleGroup) {
    let line = match session.soreness_level(muscle) {
        Some(level) => format!(
            "{} {:<width$} {}",
            SELECTED,
            muscle.display_name(),
            level,
            width = NAME_WIDTH
        ),
        None => format!("{} {}", UNSELECTED, muscle.display_name()),
    };
    output.push_str(line.trim_end());
    output.push('\n');
}

/// A click on a muscle toggles it.
pub fn on_click(muscle: MuscleGroup) -> Action {
    Action::ToggleMuscle(muscle)
}

/// A click on a side heading toggles the whole side.
pub fn on_side_click(side: Side) -> Action {
    Action::ToggleSide(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SorenessLevel;

    #[test]
    fn test_empty_session_shows_every_muscle_unselected() {
        let output = render(&SelectionSession::new());
        assert!(output.starts_with("Front [-]\n  ○ Chest\n"));
        assert!(output.contains("Back [-]\n  ○ Traps\n"));
        assert!(!output.contains(SELECTED));
        assert_eq!(output.lines().count(), 2 + 18);
    }

    #[test]
    fn test_selected_muscle_shows_level() {
        let mut session = SelectionSession::new();
        session.set_side_level(Side::Front, SorenessLevel::new(4).unwrap());
        session.apply(on_click(MuscleGroup::Chest)).unwrap();

        let output = render(&session);

        assert!(output.starts_with("Front [4]\n  ● Chest        4\n"));
    }

    #[test]
    fn test_full_body_id_is_listed_first_when_selected() {
        let mut session = SelectionSession::new();
        session.apply(on_click(MuscleGroup::FullBody)).unwrap();

        let output = render(&session);

        assert!(output.starts_with("● Full Body    1\nFront [-]\n"));
    }

    #[test]
    fn test_side_click_selects_side() {
        let mut session = SelectionSession::new();
        session.apply(on_side_click(Side::Back)).unwrap();
        assert!(session.covers(Side::Back.zone()));
    }
}
