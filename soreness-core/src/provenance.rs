use serde::{Deserialize, Serialize};

/// Which granularity of user action last decided a muscle's level.
///
/// Ordered by specificity: `None < FullBody < FrontBack < Region < Manual`.
/// Cascading setters skip `Manual` muscles; see [`SelectionSession`](crate::SelectionSession)
/// for the operations that bypass the ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideProvenance {
    #[default]
    None,
    FullBody,
    FrontBack,
    Region,
    Manual,
}

impl OverrideProvenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FullBody => "full-body",
            Self::FrontBack => "front-back",
            Self::Region => "region",
            Self::Manual => "manual",
        }
    }

    /// Whether an update carrying `incoming` may replace this provenance.
    pub fn yields_to(&self, incoming: OverrideProvenance) -> bool {
        incoming >= *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specificity_order() {
        assert!(OverrideProvenance::Manual > OverrideProvenance::Region);
        assert!(OverrideProvenance::Region > OverrideProvenance::FrontBack);
        assert!(OverrideProvenance::FrontBack > OverrideProvenance::FullBody);
        assert!(OverrideProvenance::FullBody > OverrideProvenance::None);
    }

    #[test]
    fn test_yields_to_equal_or_more_specific() {
        assert!(OverrideProvenance::FullBody.yields_to(OverrideProvenance::FullBody));
        assert!(OverrideProvenance::FrontBack.yields_to(OverrideProvenance::Region));
        assert!(!OverrideProvenance::Region.yields_to(OverrideProvenance::FrontBack));
    }

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&OverrideProvenance::FrontBack).unwrap();
        assert_eq!(json, "\"front-back\"");
    }
}
