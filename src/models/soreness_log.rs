use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use soreness_core::{MuscleGroup, SorenessLevel};

/// Input for creating one soreness log row.
///
/// Absent optional fields are omitted from the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSorenessLogInput {
    /// Day the soreness applies to. The endpoint defaults to today when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date: Option<NaiveDate>,
    pub body_part: MuscleGroup,
    pub soreness_1_5: SorenessLevel,
    /// Rate of perceived exertion of the last session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_rpe: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A created log row as acknowledged by the endpoint.
///
/// Only success or failure matters to submission, so the record is not
/// interpreted beyond its optional `id`. An empty acknowledgment is the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SorenessLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
