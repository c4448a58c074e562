//! Plain-text views over a [`SelectionSession`](crate::models::SelectionSession).
//!
//! Views never mutate the session. Their `on_*` helpers turn a user gesture into
//! an [`Action`](crate::models::Action) for the owner to apply.

pub mod body_map;
pub mod logged_muscles;
pub mod region_selector;

use crate::models::{OverrideProvenance, SorenessLevel};

const SELECTED: char = '●';
const UNSELECTED: char = '○';

/// Width of the muscle name column.
const NAME_WIDTH: usize = 12;

fn level_cell(level: Option<SorenessLevel>) -> String {
    level.map_or_else(|| "-".to_string(), |l| l.to_string())
}

/// Heading text for a zone or side name: first letter upper-cased.
fn title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn provenance_tag(provenance: OverrideProvenance) -> &'static str {
    match provenance {
        OverrideProvenance::None => "",
        other => other.as_str(),
    }
}
