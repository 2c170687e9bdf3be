//! persona_core — prompt builder, response interpreter, and report model.
//!
//! The pipeline is three pure steps:
//!
//! ```text
//! user text ──► build_prompt ──► completion service ──► parse ──► PersonalityReport
//!                                  (persona_llms)          │
//!                                                          └──► Unstructured (show raw)
//! ```
//!
//! Nothing in this crate performs I/O or can fail: `parse` absorbs every
//! malformed input into the `Unstructured` outcome.

pub mod interpret;
pub mod prompt;
pub mod report;

pub use interpret::{parse, ParseOutcome};
pub use prompt::{build_prompt, ANALYST_SYSTEM};
pub use report::{
    BigFive, Mbti, PersonalityReport, Recommendation, RecommendationKind, TraitScore,
    ARTIFACT_FILENAME,
};
