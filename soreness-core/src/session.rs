use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::action::Action;
use crate::level::SorenessLevel;
use crate::muscle::MuscleGroup;
use crate::provenance::OverrideProvenance;
use crate::zone::{BodyZone, Side};

/// Level applied by the full-body toggle in a fresh session.
pub const DEFAULT_FULL_BODY_LEVEL: SorenessLevel = SorenessLevel::VERY_MILD;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Muscle '{0}' is not selected")]
    MuscleNotSelected(MuscleGroup),

    #[error("Zone '{0}' is not an anatomical region")]
    NotARegion(BodyZone),
}

/// A selected muscle as seen by views, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMuscle {
    pub muscle: MuscleGroup,
    pub level: SorenessLevel,
    pub provenance: OverrideProvenance,
}

/// Editing state for one soreness entry.
///
/// Levels can be set at four granularities and cascade down to the muscles
/// they cover:
///
/// | operation | scope | overwrites `manual`? |
/// |---|---|---|
/// | [`toggle_full_body`](Self::toggle_full_body) | every muscle | yes |
/// | [`toggle_side`](Self::toggle_side) | front or back | yes |
/// | [`set_side_level`](Self::set_side_level) | selected side muscles | no |
/// | [`set_region_level`](Self::set_region_level) | selected region muscles | no |
/// | [`set_muscle_level`](Self::set_muscle_level) | one muscle | always wins |
///
/// The selected list and the keys of both level maps are always the same set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSession {
    selected_muscles: Vec<MuscleGroup>,
    soreness_levels: HashMap<MuscleGroup, SorenessLevel>,
    override_levels: HashMap<MuscleGroup, OverrideProvenance>,
    region_levels: BTreeMap<BodyZone, SorenessLevel>,
    front_level: Option<SorenessLevel>,
    back_level: Option<SorenessLevel>,
    full_body_default_level: SorenessLevel,
    notes: Option<String>,
    rpe: Option<f32>,
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::with_full_body_default(DEFAULT_FULL_BODY_LEVEL)
    }
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_body_default(level: SorenessLevel) -> Self {
        Self {
            selected_muscles: Vec::new(),
            soreness_levels: HashMap::new(),
            override_levels: HashMap::new(),
            region_levels: BTreeMap::new(),
            front_level: None,
            back_level: None,
            full_body_default_level: level,
            notes: None,
            rpe: None,
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Selected muscles in the order they were selected.
    pub fn selected_muscles(&self) -> &[MuscleGroup] {
        &self.selected_muscles
    }

    pub fn is_selected(&self, muscle: MuscleGroup) -> bool {
        self.soreness_levels.contains_key(&muscle)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_muscles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_muscles.len()
    }

    pub fn soreness_level(&self, muscle: MuscleGroup) -> Option<SorenessLevel> {
        self.soreness_levels.get(&muscle).copied()
    }

    pub fn provenance(&self, muscle: MuscleGroup) -> Option<OverrideProvenance> {
        self.override_levels.get(&muscle).copied()
    }

    pub fn soreness_levels(&self) -> &HashMap<MuscleGroup, SorenessLevel> {
        &self.soreness_levels
    }

    pub fn override_levels(&self) -> &HashMap<MuscleGroup, OverrideProvenance> {
        &self.override_levels
    }

    /// Selected muscles with their level and provenance, in selection order.
    pub fn entries(&self) -> impl Iterator<Item = SelectedMuscle> + '_ {
        self.selected_muscles.iter().filter_map(|&muscle| {
            Some(SelectedMuscle {
                muscle,
                level: self.soreness_level(muscle)?,
                provenance: self.provenance(muscle)?,
            })
        })
    }

    pub fn region_level(&self, zone: BodyZone) -> Option<SorenessLevel> {
        self.region_levels.get(&zone).copied()
    }

    pub fn region_levels(&self) -> &BTreeMap<BodyZone, SorenessLevel> {
        &self.region_levels
    }

    /// The last level applied to `side` as a whole, if the side was ever set.
    pub fn side_level(&self, side: Side) -> Option<SorenessLevel> {
        match side {
            Side::Front => self.front_level,
            Side::Back => self.back_level,
        }
    }

    pub fn full_body_default_level(&self) -> SorenessLevel {
        self.full_body_default_level
    }

    /// Whether every muscle of `zone` is selected.
    pub fn covers(&self, zone: BodyZone) -> bool {
        zone.muscles().iter().all(|m| self.is_selected(*m))
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.filter(|n| !n.trim().is_empty());
    }

    pub fn rpe(&self) -> Option<f32> {
        self.rpe
    }

    pub fn set_rpe(&mut self, rpe: Option<f32>) {
        self.rpe = rpe;
    }

    // ============================================================
    // Cascade operations
    // ============================================================

    /// Dispatch a user input event to the matching operation.
    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::ToggleMuscle(muscle) => self.toggle_muscle(muscle),
            Action::ToggleFullBody => self.toggle_full_body(),
            Action::ToggleSide(side) => self.toggle_side(side),
            Action::SetSideLevel(side, level) => self.set_side_level(side, level),
            Action::SetRegionLevel(zone, level) => self.set_region_level(zone, level)?,
            Action::SetMuscleLevel(muscle, level) => self.set_muscle_level(muscle, level)?,
            Action::SetFullBodyLevel(level) => self.set_full_body_level(level),
            Action::RemoveMuscle(muscle) => self.remove_muscle(muscle),
            Action::ClearAll => self.clear_all(),
        }
        Ok(())
    }

    /// Deselect `muscle`, or select it with an inherited level.
    ///
    /// Inheritance takes the most specific source available: an explicit level on
    /// the muscle's region, then the level of its side, then the full-body default.
    pub fn toggle_muscle(&mut self, muscle: MuscleGroup) {
        if self.remove(muscle) {
            tracing::debug!("Deselected {}", muscle);
            return;
        }

        let (level, provenance) = self.inherited_level(muscle);
        self.insert(muscle, level, provenance);
        tracing::debug!(
            "Selected {} at level {} ({})",
            muscle,
            level,
            provenance.as_str()
        );
    }

    fn inherited_level(&self, muscle: MuscleGroup) -> (SorenessLevel, OverrideProvenance) {
        if let Some(level) = BodyZone::region_of(muscle).and_then(|r| self.region_level(r)) {
            return (level, OverrideProvenance::Region);
        }
        if BodyZone::Front.contains(muscle) {
            if let Some(level) = self.front_level {
                return (level, OverrideProvenance::FrontBack);
            }
        } else if BodyZone::Back.contains(muscle) {
            if let Some(level) = self.back_level {
                return (level, OverrideProvenance::FrontBack);
            }
        }
        (self.full_body_default_level, OverrideProvenance::FullBody)
    }

    /// Select every muscle at the full-body default, or clear the session if
    /// every muscle is already selected.
    ///
    /// Selecting overwrites all prior levels, `manual` included, and resets both
    /// side levels to the default.
    pub fn toggle_full_body(&mut self) {
        if self.covers(BodyZone::FullBody) {
            self.clear_selections();
            tracing::debug!("Full body deselected");
            return;
        }

        let level = self.full_body_default_level;
        for muscle in BodyZone::FullBody.muscles() {
            self.insert(*muscle, level, OverrideProvenance::FullBody);
        }
        self.front_level = Some(level);
        self.back_level = Some(level);
        tracing::debug!("Full body selected at level {}", level);
    }

    /// Deselect a fully selected side, or select the whole side at its level.
    ///
    /// Selecting assigns the side level to every muscle of the side,
    /// overwriting `manual` levels.
    pub fn toggle_side(&mut self, side: Side) {
        let zone = side.zone();
        if self.covers(zone) {
            for muscle in zone.muscles() {
                self.remove(*muscle);
            }
            tracing::debug!("Deselected {} side", side);
            return;
        }

        let level = self
            .side_level(side)
            .unwrap_or(self.full_body_default_level);
        self.store_side_level(side, level);
        for muscle in zone.muscles() {
            self.insert(*muscle, level, OverrideProvenance::FrontBack);
        }
        tracing::debug!("Selected {} side at level {}", side, level);
    }

    /// Record the side level and cascade it to selected, non-manual muscles.
    pub fn set_side_level(&mut self, side: Side, level: SorenessLevel) {
        self.store_side_level(side, level);
        let updated = self.cascade(side.zone(), level, OverrideProvenance::FrontBack);
        tracing::debug!("Set {} side to {} ({} muscles)", side, level, updated);
    }

    /// Record a region level and cascade it to selected, non-manual muscles.
    pub fn set_region_level(
        &mut self,
        zone: BodyZone,
        level: SorenessLevel,
    ) -> Result<(), SessionError> {
        if !zone.is_region() {
            return Err(SessionError::NotARegion(zone));
        }
        self.region_levels.insert(zone, level);
        let updated = self.cascade(zone, level, OverrideProvenance::Region);
        tracing::debug!("Set region {} to {} ({} muscles)", zone, level, updated);
        Ok(())
    }

    /// Pin a selected muscle's level. Cascading setters will skip it afterwards.
    pub fn set_muscle_level(
        &mut self,
        muscle: MuscleGroup,
        level: SorenessLevel,
    ) -> Result<(), SessionError> {
        if !self.is_selected(muscle) {
            return Err(SessionError::MuscleNotSelected(muscle));
        }
        self.soreness_levels.insert(muscle, level);
        self.override_levels.insert(muscle, OverrideProvenance::Manual);
        tracing::debug!("Set {} to {} (manual)", muscle, level);
        Ok(())
    }

    /// Change the full-body default.
    ///
    /// Selected muscles whose level came from the full-body scope follow the new
    /// default; anything set more specifically keeps its level.
    pub fn set_full_body_level(&mut self, level: SorenessLevel) {
        self.full_body_default_level = level;
        let mut updated = 0;
        for muscle in &self.selected_muscles {
            let provenance = self.override_levels.get(muscle).copied().unwrap_or_default();
            if provenance.yields_to(OverrideProvenance::FullBody) {
                self.soreness_levels.insert(*muscle, level);
                self.override_levels
                    .insert(*muscle, OverrideProvenance::FullBody);
                updated += 1;
            }
        }
        tracing::debug!("Set full body default to {} ({} muscles)", level, updated);
    }

    /// Deselect `muscle`. Does nothing if it is not selected.
    pub fn remove_muscle(&mut self, muscle: MuscleGroup) {
        if self.remove(muscle) {
            tracing::debug!("Removed {}", muscle);
        }
    }

    /// Drop every selection, region level, note and RPE.
    ///
    /// Side levels and the full-body default are kept.
    pub fn clear_all(&mut self) {
        self.clear_selections();
        self.notes = None;
        self.rpe = None;
        tracing::debug!("Cleared session");
    }

    // ============================================================
    // Internals
    // ============================================================

    fn insert(&mut self, muscle: MuscleGroup, level: SorenessLevel, provenance: OverrideProvenance) {
        if !self.soreness_levels.contains_key(&muscle) {
            self.selected_muscles.push(muscle);
        }
        self.soreness_levels.insert(muscle, level);
        self.override_levels.insert(muscle, provenance);
    }

    fn remove(&mut self, muscle: MuscleGroup) -> bool {
        if self.soreness_levels.remove(&muscle).is_none() {
            return false;
        }
        self.override_levels.remove(&muscle);
        self.selected_muscles.retain(|m| *m != muscle);
        true
    }

    fn clear_selections(&mut self) {
        self.selected_muscles.clear();
        self.soreness_levels.clear();
        self.override_levels.clear();
        self.region_levels.clear();
    }

    fn store_side_level(&mut self, side: Side, level: SorenessLevel) {
        match side {
            Side::Front => self.front_level = Some(level),
            Side::Back => self.back_level = Some(level),
        }
    }

    /// Apply `level` to the selected muscles of `zone` that are not `manual`.
    fn cascade(
        &mut self,
        zone: BodyZone,
        level: SorenessLevel,
        provenance: OverrideProvenance,
    ) -> usize {
        let mut updated = 0;
        for muscle in zone.muscles() {
            match self.override_levels.get(muscle).copied() {
                None | Some(OverrideProvenance::Manual) => continue,
                Some(_) => {
                    self.soreness_levels.insert(*muscle, level);
                    self.override_levels.insert(*muscle, provenance);
                    updated += 1;
                }
            }
        }
        updated
    }
}
