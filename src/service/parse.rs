//! Defensive parsing of semi-structured model output
//!
//! The model returns free text with no schema guarantee; a bracket scan plus
//! strict `serde_json` decoding tolerates surrounding prose and formatting
//! drift while per-field default injection guarantees a well-shaped result.
//! Parse functions return `Option`; each consuming service collapses `None`
//! into its own static default, so a parse failure never escapes a component.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::model::{Perspective, NEUTRAL_SCORE};

/// Placeholder injected when the model omits its reasoning
pub const FALLBACK_REASONING: &str = "Analysis reasoning not provided.";

/// Expected shape of one arbiter's scored object
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    /// Key holding the arbiter's headline score (e.g. "empiricalScore")
    pub overall_key: &'static str,
    /// Fixed sub-score keys expected under "components"
    pub component_keys: &'static [&'static str],
}

/// A scored object after validation and default injection
///
/// `extra` carries any keys the schema does not name, unchanged, so
/// arbiter-specific lists (fallacies, stakeholders) survive parsing.
#[derive(Debug, Clone)]
pub struct ParsedAnalysis {
    pub overall: f64,
    pub components: BTreeMap<String, f64>,
    pub reasoning: String,
    pub extra: Map<String, Value>,
}

/// Parse an object-shaped response between the first `{` and the last `}`
///
/// Returns `None` only when no decodable object exists at all; a decoded
/// object always yields a fully-populated result, with 0.5 injected for any
/// missing, non-numeric, or out-of-range score.
pub fn parse_scored_object(text: &str, schema: &ObjectSchema) -> Option<ParsedAnalysis> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    let value: Value = serde_json::from_str(&text[start..=end]).ok()?;
    let Value::Object(mut object) = value else {
        return None;
    };

    let overall = object
        .remove(schema.overall_key)
        .and_then(|v| unit_score(&v))
        .unwrap_or(NEUTRAL_SCORE);

    let mut components: BTreeMap<String, f64> = match object.remove("components") {
        Some(Value::Object(raw)) => raw
            .into_iter()
            .map(|(key, v)| {
                let score = unit_score(&v).unwrap_or(NEUTRAL_SCORE);
                (key, score)
            })
            .collect(),
        _ => BTreeMap::new(),
    };
    for key in schema.component_keys {
        components.entry((*key).to_string()).or_insert(NEUTRAL_SCORE);
    }

    let reasoning = match object.remove("reasoning") {
        Some(Value::String(s)) => s,
        _ => FALLBACK_REASONING.to_string(),
    };

    Some(ParsedAnalysis {
        overall,
        components,
        reasoning,
        extra: object,
    })
}

/// Parse a list-shaped response between the first `[` and the last `]`
///
/// Every element must be a string, else the whole parse fails.
pub fn parse_string_list(text: &str) -> Option<Vec<String>> {
    let items = decode_array(text)?;
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Parse a list of perspective objects, discarding malformed elements
///
/// An element must carry string `name`, `description`, and `assessment`; a
/// missing or invalid `score` defaults to 0.5. Zero surviving elements is a
/// total failure.
pub fn parse_perspective_list(text: &str) -> Option<Vec<Perspective>> {
    let items = decode_array(text)?;
    let perspectives: Vec<Perspective> = items.iter().filter_map(perspective_from_value).collect();
    if perspectives.is_empty() {
        None
    } else {
        Some(perspectives)
    }
}

fn decode_array(text: &str) -> Option<Vec<Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }

    match serde_json::from_str(&text[start..=end]).ok()? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

fn perspective_from_value(value: &Value) -> Option<Perspective> {
    let object = value.as_object()?;
    Some(Perspective {
        name: object.get("name")?.as_str()?.to_string(),
        description: object.get("description")?.as_str()?.to_string(),
        assessment: object.get("assessment")?.as_str()?.to_string(),
        score: object
            .get("score")
            .and_then(unit_score)
            .unwrap_or(NEUTRAL_SCORE),
    })
}

/// A number in [0, 1], or nothing
fn unit_score(value: &Value) -> Option<f64> {
    let score = value.as_f64()?;
    (0.0..=1.0).contains(&score).then_some(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: ObjectSchema = ObjectSchema {
        overall_key: "empiricalScore",
        component_keys: &[
            "evidenceAvailability",
            "measurability",
            "observability",
            "testability",
        ],
    };

    #[test]
    fn scored_object_with_surrounding_prose() {
        let text = r#"Here is my analysis:
        {
            "empiricalScore": 0.8,
            "components": {
                "evidenceAvailability": 0.9,
                "measurability": 0.7,
                "observability": 0.8,
                "testability": 0.85
            },
            "reasoning": "Well supported by observation."
        }
        I hope this helps!"#;

        let parsed = parse_scored_object(text, &SCHEMA).unwrap();
        assert_eq!(parsed.overall, 0.8);
        assert_eq!(parsed.components["testability"], 0.85);
        assert_eq!(parsed.reasoning, "Well supported by observation.");
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn scored_object_injects_missing_fields() {
        let parsed = parse_scored_object(r#"{"components": {}}"#, &SCHEMA).unwrap();

        assert_eq!(parsed.overall, NEUTRAL_SCORE);
        assert_eq!(parsed.components.len(), 4);
        assert!(parsed.components.values().all(|s| *s == NEUTRAL_SCORE));
        assert_eq!(parsed.reasoning, FALLBACK_REASONING);
    }

    #[test]
    fn scored_object_replaces_components_when_wrong_shape() {
        let text = r#"{"empiricalScore": 0.6, "components": "not an object"}"#;
        let parsed = parse_scored_object(text, &SCHEMA).unwrap();

        assert_eq!(parsed.overall, 0.6);
        assert_eq!(parsed.components.len(), 4);
        assert!(parsed.components.values().all(|s| *s == NEUTRAL_SCORE));
    }

    #[test]
    fn scored_object_clamps_out_of_range_values() {
        let text = r#"{
            "empiricalScore": 1.7,
            "components": {"observability": -0.2, "testability": 0.4},
            "reasoning": "r"
        }"#;
        let parsed = parse_scored_object(text, &SCHEMA).unwrap();

        assert_eq!(parsed.overall, NEUTRAL_SCORE);
        assert_eq!(parsed.components["observability"], NEUTRAL_SCORE);
        assert_eq!(parsed.components["testability"], 0.4);
    }

    #[test]
    fn scored_object_passes_unknown_keys_through() {
        let text = r#"{
            "empiricalScore": 0.5,
            "identifiedFallacies": ["ad hominem"],
            "confidence": "high"
        }"#;
        let parsed = parse_scored_object(text, &SCHEMA).unwrap();

        assert_eq!(parsed.extra.len(), 2);
        assert_eq!(parsed.extra["confidence"], "high");
    }

    #[test]
    fn scored_object_rejects_non_object_and_garbage() {
        assert!(parse_scored_object("no braces here", &SCHEMA).is_none());
        assert!(parse_scored_object("{not json}", &SCHEMA).is_none());
        assert!(parse_scored_object("} {", &SCHEMA).is_none());
    }

    #[test]
    fn string_list_with_surrounding_prose() {
        let text = r#"The claims are: ["First claim here", "Second claim here"] as requested."#;
        let claims = parse_string_list(text).unwrap();
        assert_eq!(claims, vec!["First claim here", "Second claim here"]);
    }

    #[test]
    fn string_list_rejects_non_string_elements() {
        assert!(parse_string_list(r#"["a claim", 42]"#).is_none());
        assert!(parse_string_list("no brackets").is_none());
    }

    /// The bracket scan reaches inside a wrapping object and finds the array
    #[test]
    fn string_list_found_inside_wrapping_object() {
        assert_eq!(
            parse_string_list(r#"{"claims": ["The moon is made of rock"]}"#).unwrap(),
            vec!["The moon is made of rock"]
        );
    }

    #[test]
    fn string_list_accepts_empty_array() {
        assert_eq!(parse_string_list("[]").unwrap(), Vec::<String>::new());
    }

    /// 2 well-formed objects plus 1 malformed one yield exactly 2 perspectives
    #[test]
    fn perspective_list_discards_malformed_elements() {
        let text = r#"[
            {"name": "Scientific", "description": "d1", "assessment": "a1", "score": 0.7},
            {"name": "Ethical", "description": "d2", "assessment": "a2"},
            {"name": "Broken", "description": "d3"}
        ]"#;

        let perspectives = parse_perspective_list(text).unwrap();
        assert_eq!(perspectives.len(), 2);
        assert_eq!(perspectives[0].score, 0.7);
        // Missing score defaults to neutral
        assert_eq!(perspectives[1].score, NEUTRAL_SCORE);
    }

    #[test]
    fn perspective_list_fails_when_nothing_survives() {
        assert!(parse_perspective_list(r#"[{"name": "only a name"}]"#).is_none());
        assert!(parse_perspective_list("[]").is_none());
        assert!(parse_perspective_list("not a list at all").is_none());
    }
}
