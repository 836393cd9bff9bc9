//! JSON-in-text extraction for model output.
//!
//! The model is asked for JSON-only output but routinely wraps it in prose
//! or code fences, and sometimes drifts on field names. This is the most
//! safety-critical boundary in the service: everything here treats the
//! input as untrusted.

use serde_json::{Map, Value};

use crate::domain::{extract_name_set, is_string_sequence, Matchup, MAX_MATCHUP_NAMES};
use crate::error::{LlmError, Result};

/// Parse the JSON object embedded in free-form model output.
///
/// Takes the substring from the first `{` to the last `}` (inclusive) and
/// requires it to parse as a JSON object. `wins`/`losses` are read when
/// they are string arrays; otherwise the alternate field names
/// `better_against`/`worse_against` are consulted. Both lists pass through
/// [`extract_name_set`] regardless of which field supplied them, so the
/// cap, dedup, and normalization invariants always hold.
///
/// # Errors
///
/// Returns [`LlmError::MalformedOutput`] when no brace pair exists, the
/// braces are out of order, the substring is not valid JSON, or the parsed
/// value is not an object.
pub fn extract_matchup_json(raw: &str) -> Result<Matchup> {
    let start = raw
        .find('{')
        .ok_or_else(|| malformed("no opening brace"))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| malformed("no closing brace"))?;
    if end <= start {
        return Err(malformed("closing brace precedes opening brace"));
    }

    let value: Value = serde_json::from_str(&raw[start..=end])
        .map_err(|e| malformed(&format!("invalid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| malformed("top-level value is not an object"))?;

    Ok(Matchup {
        wins: pick_list(object, "wins", "better_against"),
        losses: pick_list(object, "losses", "worse_against"),
        source: None,
        message: None,
    })
}

/// Read `primary` when it is a string array, else fall back to `alternate`.
fn pick_list(object: &Map<String, Value>, primary: &str, alternate: &str) -> Vec<String> {
    let value = object
        .get(primary)
        .filter(|v| is_string_sequence(v))
        .or_else(|| object.get(alternate));
    value.map_or_else(Vec::new, |v| extract_name_set(v, MAX_MATCHUP_NAMES))
}

fn malformed(reason: &str) -> crate::error::Error {
    LlmError::MalformedOutput {
        reason: reason.to_string(),
    }
    .into()
}
