//! Personality report data model.

use serde::{Deserialize, Serialize};

/// Filename for the downloadable report artifact.
pub const ARTIFACT_FILENAME: &str = "personality_analysis.json";

/// One Big Five trait estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    /// Score in [0, 100]. Enforced by [`TraitScore::new`].
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub reason: String,
}

impl TraitScore {
    /// Create a trait score, clamping into [0, 100].
    pub fn new(score: i64, reason: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0, 100) as u8,
            reason: reason.into(),
        }
    }
}

/// Big Five trait estimates. Traits the model omitted keep zero scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFive {
    #[serde(default)]
    pub openness: TraitScore,
    #[serde(default)]
    pub conscientiousness: TraitScore,
    #[serde(default)]
    pub extraversion: TraitScore,
    #[serde(default)]
    pub agreeableness: TraitScore,
    #[serde(default)]
    pub neuroticism: TraitScore,
}

impl BigFive {
    /// Traits in canonical order, paired with their names.
    pub fn traits(&self) -> [(&'static str, &TraitScore); 5] {
        [
            ("openness", &self.openness),
            ("conscientiousness", &self.conscientiousness),
            ("extraversion", &self.extraversion),
            ("agreeableness", &self.agreeableness),
            ("neuroticism", &self.neuroticism),
        ]
    }
}

/// Likely MBTI type with the model's justification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mbti {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub reason: String,
}

/// Category of a recommendation. Unknown categories keep their raw label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecommendationKind {
    Book,
    Career,
    Other(String),
}

impl RecommendationKind {
    pub fn as_str(&self) -> &str {
        match self {
            RecommendationKind::Book => "book",
            RecommendationKind::Career => "career",
            RecommendationKind::Other(raw) => raw,
        }
    }
}

impl Default for RecommendationKind {
    fn default() -> Self {
        RecommendationKind::Other(String::new())
    }
}

impl From<String> for RecommendationKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "book" => RecommendationKind::Book,
            "career" => RecommendationKind::Career,
            _ => RecommendationKind::Other(raw),
        }
    }
}

impl From<RecommendationKind> for String {
    fn from(kind: RecommendationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single book or career recommendation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub kind: RecommendationKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub reason: String,
}

/// Normalized result of one analysis request.
///
/// Constructed once per request by [`crate::interpret::parse`], immutable
/// afterwards, and discarded when the next request begins. Every field has a
/// safe empty default so the report is constructible from any JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityReport {
    #[serde(default)]
    pub emotional_tone: String,
    #[serde(default)]
    pub big_five: BigFive,
    #[serde(default)]
    pub mbti: Mbti,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl PersonalityReport {
    /// Serialize for the downloadable artifact: indented UTF-8 JSON with
    /// keys in declaration order.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_score_clamps() {
        assert_eq!(TraitScore::new(150, "x").score, 100);
        assert_eq!(TraitScore::new(-5, "x").score, 0);
        assert_eq!(TraitScore::new(72, "x").score, 72);
    }

    #[test]
    fn test_recommendation_kind_round_trip() {
        assert_eq!(RecommendationKind::from("book".to_string()), RecommendationKind::Book);
        assert_eq!(RecommendationKind::from("career".to_string()), RecommendationKind::Career);
        assert_eq!(
            RecommendationKind::from("movie".to_string()),
            RecommendationKind::Other("movie".to_string())
        );
        assert_eq!(String::from(RecommendationKind::Book), "book");
        assert_eq!(String::from(RecommendationKind::Other("movie".to_string())), "movie");
    }

    #[test]
    fn test_pretty_json_key_order() {
        let report = PersonalityReport::default();
        let json = report.to_pretty_json();
        let tone = json.find("emotional_tone").unwrap();
        let big_five = json.find("big_five").unwrap();
        let mbti = json.find("mbti").unwrap();
        let advice = json.find("advice").unwrap();
        let recs = json.find("recommendations").unwrap();
        assert!(tone < big_five && big_five < mbti && mbti < advice && advice < recs);
    }

    #[test]
    fn test_mbti_serializes_type_key() {
        let mbti = Mbti {
            type_: "INTJ".to_string(),
            reason: String::new(),
        };
        let json = serde_json::to_string(&mbti).unwrap();
        assert!(json.contains("\"type\":\"INTJ\""));
    }
}
