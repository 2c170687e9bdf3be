//! Prompt builder: fixed analyst instruction + user writing sample.

/// System instruction for the personality analyst.
pub const ANALYST_SYSTEM: &str = r#"You are a psychologist trained in the Big Five and MBTI. Analyze the user's writing and return:
1. Emotional tone
2. Big Five personality trait estimates
3. A likely MBTI type
4. Personalized advice, book or career recommendations

Respond with a single JSON object only, no markdown or explanation outside JSON, with keys: "emotional_tone" (string), "big_five" (object mapping "openness", "conscientiousness", "extraversion", "agreeableness", "neuroticism" each to { "score": integer 0-100, "reason": string }), "mbti" ({ "type": string, "reason": string }), "advice" (array of strings), "recommendations" (array of { "kind": "book" or "career", "title": string, "reason": string })."#;

/// Flatten instruction and user text into one completion prompt.
///
/// Completion-style backends accept a single undifferentiated string rather
/// than structured chat messages, so the instruction and input are laid out
/// in a fixed template. No validation: callers reject empty input first.
pub fn build_prompt(system_instruction: &str, user_text: &str) -> String {
    format!("System:\n{system_instruction}\n\nUser:\n{user_text}\n\nAssistant:\n")
}
