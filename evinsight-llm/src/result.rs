use std::fmt;

use evinsight_core::InsightError;
use evinsight_prompt::TaskKind;

/// Longest error excerpt carried into a fallback message, in characters.
pub const MAX_REASON_CHARS: usize = 100;

/// Outcome of one insight call.
///
/// Rendering either variant yields displayable text: the model's answer
/// verbatim, or `"Unable to <task>: <reason>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsightResult {
    Generated(String),
    Unavailable { kind: TaskKind, reason: String },
}

impl InsightResult {
    pub fn unavailable(kind: TaskKind, error: &InsightError) -> Self {
        Self::Unavailable {
            kind,
            reason: error.to_string().chars().take(MAX_REASON_CHARS).collect(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, InsightResult::Generated(_))
    }

    pub fn generated(&self) -> Option<&str> {
        match self {
            InsightResult::Generated(text) => Some(text),
            InsightResult::Unavailable { .. } => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            InsightResult::Generated(text) => text,
            unavailable => unavailable.to_string(),
        }
    }
}

impl fmt::Display for InsightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightResult::Generated(text) => f.write_str(text),
            InsightResult::Unavailable { kind, reason } => {
                write!(f, "Unable to {}: {}", kind.fallback_description(), reason)
            }
        }
    }
}

impl From<InsightResult> for String {
    fn from(result: InsightResult) -> Self {
        result.into_text()
    }
}
