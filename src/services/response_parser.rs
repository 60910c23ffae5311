//! Delimited-section extraction from text-generation responses

use crate::error::{ExplainerError, ExplainerResult};
use crate::types::Explanation;

pub const RISK_EXPLANATION_START: &str = "<<RISK_EXPLANATION>>";
pub const RISK_EXPLANATION_END: &str = "<</RISK_EXPLANATION>>";
pub const CONFIDENCE_NOTE_START: &str = "<<CONFIDENCE_NOTE>>";
pub const CONFIDENCE_NOTE_END: &str = "<</CONFIDENCE_NOTE>>";

/// Extract the trimmed text between the first occurrence of `start` and
/// the first occurrence of `end` after it. `None` when either marker is
/// missing.
pub fn extract_between(text: &str, start: &str, end: &str) -> Option<String> {
    let start_idx = text.find(start)? + start.len();
    let end_idx = text[start_idx..].find(end)?;
    Some(text[start_idx..start_idx + end_idx].trim().to_string())
}

/// Parse both explanation sections out of a raw model response.
///
/// A missing or empty section fails with an invalid-format error; the
/// caller decides whether that degrades or aborts the request.
pub fn parse_explanation(text: &str) -> ExplainerResult<Explanation> {
    let risk_explanation = extract_between(text, RISK_EXPLANATION_START, RISK_EXPLANATION_END)
        .filter(|section| !section.is_empty())
        .ok_or(ExplainerError::InvalidFormat {
            section: "risk explanation",
        })?;

    let confidence_note = extract_between(text, CONFIDENCE_NOTE_START, CONFIDENCE_NOTE_END)
        .filter(|section| !section.is_empty())
        .ok_or(ExplainerError::InvalidFormat {
            section: "confidence note",
        })?;

    Ok(Explanation {
        risk_explanation,
        confidence_note,
    })
}
