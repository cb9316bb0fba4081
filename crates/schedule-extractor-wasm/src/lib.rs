//! WASM bindings for the booking form.
//!
//! Everything crosses the boundary as JSON strings in the form's own shape
//! (`{"monday": {"slot1": {"start": "20:00", "end": "23:00"}, ...}}`).

use schedule_extractor::{extract, WeeklyAvailability};
use wasm_bindgen::prelude::*;

/// Extract the days mentioned in `text` as a sparse JSON object.
///
/// Never throws: unrecognized text yields `"{}"`.
#[wasm_bindgen(js_name = "parseScheduleText")]
pub fn parse_schedule_text(text: &str) -> String {
    // Serializing the sparse map of plain values cannot fail.
    serde_json::to_string(&extract(text)).unwrap_or_else(|_| "{}".to_string())
}

/// Merge the days mentioned in `text` onto the full week in `base_json`.
#[wasm_bindgen(js_name = "mergeScheduleText")]
pub fn merge_schedule_text(base_json: &str, text: &str) -> Result<String, JsError> {
    let mut week: WeeklyAvailability = serde_json::from_str(base_json)?;
    week.merge(&extract(text));
    Ok(serde_json::to_string(&week)?)
}

/// Validate a full week, returning one message per problem slot.
#[wasm_bindgen(js_name = "validateWeek")]
pub fn validate_week(week_json: &str) -> Result<Vec<String>, JsError> {
    let week: WeeklyAvailability = serde_json::from_str(week_json)?;
    Ok(week.validate().iter().map(ToString::to_string).collect())
}
