//! Response interpreter: strict JSON parse with a brace-span fallback and
//! tolerant field normalization.

use serde_json::Value;

use crate::report::{
    BigFive, Mbti, PersonalityReport, Recommendation, RecommendationKind, TraitScore,
};

/// Outcome of interpreting raw model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A JSON object was extracted and normalized into a report.
    Structured(PersonalityReport),
    /// No JSON object could be extracted; callers show the raw text as-is.
    Unstructured,
}

/// Interpret raw model output.
///
/// Tries a strict object parse of the whole text first, then the substring
/// from the first `{` to the last `}`. When the text contains more than one
/// brace-delimited block the span is greedy and may capture prose between
/// blocks; that candidate then fails to parse and the outcome is
/// `Unstructured`. This function never panics and never returns an error.
pub fn parse(raw: &str) -> ParseOutcome {
    for candidate in candidates(raw) {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            if value.is_object() {
                return ParseOutcome::Structured(normalize(&value));
            }
        }
    }
    ParseOutcome::Unstructured
}

/// Candidate substrings to attempt, in order: the full text, then the span
/// from the first `{` to the last `}`. The last `}` is the same brace
/// whether or not it ends the text, so one span covers both the trailing
/// and the embedded layout.
fn candidates(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    let mut out = vec![trimmed];
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            let span = &trimmed[start..=end];
            if span != trimmed {
                out.push(span);
            }
        }
    }
    out
}

/// Normalize a parsed JSON object into a report. Wrong-typed or absent
/// fields collapse to their defaults; scores are clamped into [0, 100].
fn normalize(value: &Value) -> PersonalityReport {
    PersonalityReport {
        emotional_tone: string_field(value, "emotional_tone"),
        big_five: big_five(value.get("big_five")),
        mbti: mbti(value.get("mbti")),
        advice: string_list(value.get("advice")),
        recommendations: recommendations(value.get("recommendations")),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn big_five(value: Option<&Value>) -> BigFive {
    let score = |name: &str| trait_score(value.and_then(|v| v.get(name)));
    BigFive {
        openness: score("openness"),
        conscientiousness: score("conscientiousness"),
        extraversion: score("extraversion"),
        agreeableness: score("agreeableness"),
        neuroticism: score("neuroticism"),
    }
}

fn trait_score(value: Option<&Value>) -> TraitScore {
    match value {
        Some(v) if v.is_object() => {
            TraitScore::new(numeric_score(v.get("score")), string_field(v, "reason"))
        }
        _ => TraitScore::default(),
    }
}

/// Integers, floats, and numeric strings all coerce; anything else is 0.
fn numeric_score(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    }
}

fn mbti(value: Option<&Value>) -> Mbti {
    match value {
        Some(v) if v.is_object() => Mbti {
            type_: string_field(v, "type"),
            reason: string_field(v, "reason"),
        },
        _ => Mbti::default(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn recommendations(value: Option<&Value>) -> Vec<Recommendation> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| Recommendation {
                    kind: RecommendationKind::from(string_field(item, "kind")),
                    title: string_field(item, "title"),
                    reason: string_field(item, "reason"),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured(raw: &str) -> PersonalityReport {
        match parse(raw) {
            ParseOutcome::Structured(report) => report,
            ParseOutcome::Unstructured => panic!("expected structured outcome for: {raw}"),
        }
    }

    #[test]
    fn test_no_braces_is_unstructured() {
        assert_eq!(parse("the model refused to answer"), ParseOutcome::Unstructured);
        assert_eq!(parse(""), ParseOutcome::Unstructured);
    }

    #[test]
    fn test_non_object_json_is_unstructured() {
        assert_eq!(parse("[1, 2, 3]"), ParseOutcome::Unstructured);
        assert_eq!(parse("\"just a string\""), ParseOutcome::Unstructured);
    }

    #[test]
    fn test_sparse_object_fills_defaults() {
        let report = structured("{}");
        assert_eq!(report, PersonalityReport::default());
    }

    #[test]
    fn test_trailing_json_extraction() {
        let raw = "Here is the result:\n{\"emotional_tone\":\"calm\",\"big_five\":{},\"mbti\":{},\"advice\":[],\"recommendations\":[]}";
        let report = structured(raw);
        assert_eq!(report.emotional_tone, "calm");
        assert_eq!(report.big_five, BigFive::default());
        assert_eq!(report.mbti, Mbti::default());
        assert!(report.advice.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_embedded_json_extraction() {
        let raw = "Sure! {\"emotional_tone\":\"upbeat\"} Hope that helps.";
        let report = structured(raw);
        assert_eq!(report.emotional_tone, "upbeat");
    }

    #[test]
    fn test_code_fenced_json() {
        let raw = "```json\n{\"emotional_tone\":\"wry\"}\n```";
        let report = structured(raw);
        assert_eq!(report.emotional_tone, "wry");
    }

    #[test]
    fn test_score_clamped_high() {
        let report = structured(r#"{"big_five":{"openness":{"score":"150","reason":"x"}}}"#);
        assert_eq!(report.big_five.openness.score, 100);
        assert_eq!(report.big_five.openness.reason, "x");
    }

    #[test]
    fn test_score_clamped_low_and_non_numeric() {
        let report = structured(
            r#"{"big_five":{"openness":{"score":-5},"extraversion":{"score":"abc"},"neuroticism":{"score":62.9}}}"#,
        );
        assert_eq!(report.big_five.openness.score, 0);
        assert_eq!(report.big_five.extraversion.score, 0);
        assert_eq!(report.big_five.neuroticism.score, 62);
    }

    #[test]
    fn test_wrong_typed_fields_default() {
        let report = structured(
            r#"{"emotional_tone":7,"big_five":[],"mbti":"INTJ","advice":"not a list","recommendations":{}}"#,
        );
        assert_eq!(report, PersonalityReport::default());
    }

    #[test]
    fn test_full_report_fields() {
        let raw = r#"{
            "emotional_tone": "reflective",
            "big_five": {
                "openness": {"score": 82, "reason": "varied vocabulary"},
                "conscientiousness": {"score": 55, "reason": "structured paragraphs"}
            },
            "mbti": {"type": "INFP", "reason": "introspective framing"},
            "advice": ["journal daily", "share drafts"],
            "recommendations": [
                {"kind": "book", "title": "Quiet", "reason": "matches temperament"},
                {"kind": "career", "title": "Editor", "reason": "detail focus"},
                {"kind": "podcast", "title": "Hidden Brain", "reason": "curiosity"}
            ]
        }"#;
        let report = structured(raw);
        assert_eq!(report.emotional_tone, "reflective");
        assert_eq!(report.big_five.openness.score, 82);
        assert_eq!(report.big_five.agreeableness, TraitScore::default());
        assert_eq!(report.mbti.type_, "INFP");
        assert_eq!(report.advice.len(), 2);
        assert_eq!(report.recommendations[0].kind, RecommendationKind::Book);
        assert_eq!(report.recommendations[1].kind, RecommendationKind::Career);
        assert_eq!(
            report.recommendations[2].kind,
            RecommendationKind::Other("podcast".to_string())
        );
    }

    #[test]
    fn test_serialize_then_parse_round_trips() {
        let original = structured(
            r#"{
                "emotional_tone": "calm",
                "big_five": {"openness": {"score": 91, "reason": "r"}},
                "mbti": {"type": "ENTP", "reason": "m"},
                "advice": ["a"],
                "recommendations": [{"kind": "movie", "title": "t", "reason": "why"}]
            }"#,
        );
        let round_tripped = structured(&original.to_pretty_json());
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_error_message_input_is_unstructured() {
        assert_eq!(
            parse("service unavailable: model is loading"),
            ParseOutcome::Unstructured
        );
    }
}
