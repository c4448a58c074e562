//! Region picker: a level per anatomical region, overridable per muscle.

use super::{level_cell, provenance_tag, title, NAME_WIDTH};
use crate::models::{Action, BodyZone, MuscleGroup, SelectionSession, SessionError, SorenessLevel};

/// Render the six regions with their explicit level and each muscle's state.
pub fn render(session: &SelectionSession) -> String {
    let mut output = String::new();
    for region in BodyZone::REGIONS {
        output.push_str(&format!(
            "{} [{}]\n",
            title(region.as_str()),
            level_cell(session.region_level(region))
        ));
        for muscle in region.muscles() {
            let line = format!(
                "  {:<width$} {} {}",
                muscle.display_name(),
                level_cell(session.soreness_level(*muscle)),
                session.provenance(*muscle).map_or("", provenance_tag),
                width = NAME_WIDTH
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }
    output
}

/// Setting a region's level. Only the six anatomical regions are accepted.
pub fn on_region_level(zone: BodyZone, level: SorenessLevel) -> Result<Action, SessionError> {
    if !zone.is_region() {
        return Err(SessionError::NotARegion(zone));
    }
    Ok(Action::SetRegionLevel(zone, level))
}

/// Overriding one muscle inside a region.
pub fn on_muscle_level(muscle: MuscleGroup, level: SorenessLevel) -> Action {
    Action::SetMuscleLevel(muscle, level)
}
