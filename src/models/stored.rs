//! Wire representation of a task, as kept under the storage key.

use serde::{Deserialize, Deserializer, Serialize};

/// One element of the persisted JSON array.
///
/// Dates are kept as text here; conversion to and from `chrono` types lives
/// in `core::codec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTodo {
    #[serde(deserialize_with = "number_as_i64")]
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Accept integral ids written either as integers or as whole floats.
/// Fractional, non-finite and out-of-range floats are rejected.
fn number_as_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    n.as_i64()
        .or_else(|| n.as_f64().and_then(whole_f64_to_i64))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid id: {n}")))
}

fn whole_f64_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (f.is_finite() && f.fract() == 0.0 && f >= -LIMIT && f < LIMIT).then_some(f as i64)
}
